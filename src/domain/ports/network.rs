/// Access point control
pub trait Hotspot {
    async fn start_hotspot(&self) -> bool;

    async fn stop_hotspot(&self) -> bool;
}

/// Internet reachability check
pub trait ConnectivityProbe {
    async fn is_online(&self) -> bool;
}
