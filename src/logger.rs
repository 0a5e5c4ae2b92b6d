
#[cfg(not(target_arch = "wasm32"))]
use std::{collections::HashMap, time::Instant};

#[cfg(target_arch = "wasm32")]
use web_sys::console;

#[derive(Clone, Debug)]
pub struct Logger {
    /// 10 is everything and 0 is nothing
    level: u8,

    #[cfg(not(target_arch = "wasm32"))]
    start_times: HashMap<String, Instant>,
}

impl Logger {
    pub fn new(level: u8) -> Self {
        Logger {
            level,
            #[cfg(not(target_arch = "wasm32"))]
            start_times: HashMap::new(),
        }
    }

    pub fn level(&self) -> u8 { self.level }

    pub fn enabled(&self, level: u8) -> bool { level <= self.level }

    pub fn log(&self, level: u8, msg: &str) {
        if self.enabled(level) {
            #[cfg(not(target_arch = "wasm32"))]
            println!("{}", msg);

            #[cfg(target_arch = "wasm32")]
            console::log_1(&msg.into());
        }
    }

    pub fn log_lazy(&self, level: u8, msg: impl FnOnce() -> String) {
        if self.enabled(level) {
            self.log(level, &msg());
        }
    }

    pub fn time_start(&mut self, _level: u8, name: &str) {
        #[cfg(not(target_arch = "wasm32"))]
        self.start_times.insert(name.to_string(), Instant::now());

        #[cfg(target_arch = "wasm32")]
        if self.enabled(_level) {
            console::time_with_label(name);
        }
    }

    pub fn time_end(&mut self, level: u8, name: &str) {
        #[cfg(not(target_arch = "wasm32"))]
        match self.start_times.remove(name) {
            Some(start) => {
                let elapsed = start.elapsed();
                self.log(
                    level,
                    &format!("{}: {}.{:03}", name, elapsed.as_secs(), elapsed.subsec_millis()),
                );
            }
            None => self.log(level, &format!("{}: timer was never started", name)),
        }

        #[cfg(target_arch = "wasm32")]
        if self.enabled(level) {
            console::time_end_with_label(name);
        }
    }
}
