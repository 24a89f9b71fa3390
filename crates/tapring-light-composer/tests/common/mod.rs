#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tapring_light_composer::color::is_off;
use tapring_light_composer::{LedDriver, Rgb};

/// Driver that keeps a copy of every presented frame
#[derive(Clone, Default)]
pub struct RecordingDriver {
    frames: Arc<Mutex<Vec<Vec<Rgb>>>>,
}

impl RecordingDriver {
    pub fn frames(&self) -> Vec<Vec<Rgb>> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last_frame(&self) -> Option<Vec<Rgb>> {
        self.frames.lock().unwrap().last().cloned()
    }

    pub fn reset(&self) {
        self.frames.lock().unwrap().clear();
    }
}

impl LedDriver for RecordingDriver {
    fn write<const N: usize>(&mut self, colors: &[Rgb; N]) {
        self.frames.lock().unwrap().push(colors.to_vec());
    }
}

pub fn is_dark(frame: &[Rgb]) -> bool {
    frame.iter().all(|pixel| is_off(*pixel))
}

pub fn lit_count(frame: &[Rgb]) -> usize {
    frame.iter().filter(|pixel| !is_off(**pixel)).count()
}

/// Distinct non-black colors in a frame
pub fn colors_in(frame: &[Rgb]) -> Vec<Rgb> {
    let mut colors: Vec<Rgb> = Vec::new();
    for pixel in frame {
        if !is_off(*pixel) && !colors.contains(pixel) {
            colors.push(*pixel);
        }
    }
    colors
}
