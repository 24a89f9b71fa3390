mod flag;

pub use flag::Flag;
