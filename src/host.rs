//! Frame pump: drives the engine at a fixed cadence on a dedicated thread.
//!
//! One iteration is one `tick` plus one `present`, serialized under the
//! engine lock so every presented frame is the fully consistent output of
//! the tick that produced it. The loop sleeps a fixed interval between
//! iterations; there is no drift compensation and no variable timestep.
//! `stop` blocks until the in-flight tick/present cycle completes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::consts::FRAME_INTERVAL_MS;
use crate::sim::{Engine, Frame};

/// Drawing side of the frame pump. Implementors map factions to pixels.
pub trait Present {
    /// Present one fully simulated frame.
    fn present(&mut self, frame: &Frame);
}

/// Fixed-cadence loop owner for a shared engine.
pub struct FramePump {
    engine: Arc<Mutex<Engine>>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl FramePump {
    pub fn new(engine: Arc<Mutex<Engine>>) -> Self {
        Self {
            engine,
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Spawn the loop thread. Each iteration ticks the engine, captures the
    /// resulting frame, presents it, then sleeps out the interval. A tick
    /// failure or poisoned engine lock ends the loop; it is logged, never
    /// propagated as a panic.
    pub fn start<P: Present + Send + 'static>(&mut self, mut presenter: P) {
        if self.handle.is_some() {
            log::warn!("frame pump already running");
            return;
        }
        self.running.store(true, Ordering::SeqCst);
        let running = Arc::clone(&self.running);
        let engine = Arc::clone(&self.engine);
        self.handle = Some(thread::spawn(move || {
            let interval = Duration::from_millis(FRAME_INTERVAL_MS);
            while running.load(Ordering::SeqCst) {
                let frame = match engine.lock() {
                    Ok(mut engine) => match engine.tick() {
                        Ok(()) => engine.frame(),
                        Err(err) => {
                            log::error!("frame pump stopping: {err}");
                            break;
                        }
                    },
                    Err(_) => {
                        log::error!("frame pump stopping: engine lock poisoned");
                        break;
                    }
                };
                if let Some(frame) = &frame {
                    presenter.present(frame);
                }
                thread::sleep(interval);
            }
            log::debug!("frame pump loop exited");
        }));
    }

    /// Stop the loop and block until the current tick/present cycle
    /// completes.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("frame pump thread panicked");
            }
        }
    }
}

impl Drop for FramePump {
    fn drop(&mut self) {
        self.stop();
    }
}
