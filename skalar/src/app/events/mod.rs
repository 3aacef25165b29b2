use std::{path::PathBuf, thread::JoinHandle};

use derive_new::new;
use scene_core::event::{AppEvent, EventState};

use super::EguiApp;

// ---------------------------------------------------------------------------
//
//
// EventQueue
//
//
// ---------------------------------------------------------------------------

/// Holds events queued by the UI, applied once per frame.
pub struct EventQueue<EguiApp> {
    /// Events waiting to be applied.
    queue: Vec<Box<dyn AppEvent<App = EguiApp>>>,
    /// Events that reported busy and need another poll.
    tmp_backlog: Vec<Box<dyn AppEvent<App = EguiApp>>>,
}

impl<EguiApp> EventQueue<EguiApp> {
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            tmp_backlog: Vec::new(),
        }
    }

    pub fn queue_event(&mut self, event: Box<dyn AppEvent<App = EguiApp>>) {
        self.queue.push(event);
    }
}

impl EguiApp {
    pub fn run_events(&mut self) {
        while let Some(mut event) = self.event_queue.queue.pop() {
            match event.apply(self) {
                Ok(EventState::Finished) => {
                    self.request_redraw();
                }
                Ok(EventState::Busy) => {
                    self.event_queue.tmp_backlog.push(event);
                }
                Err(err) => {
                    log::error!("event failed: {:?}", err)
                }
            }
        }

        // Busy events go back into the queue for the next frame.
        std::mem::swap(
            &mut self.event_queue.queue,
            &mut self.event_queue.tmp_backlog,
        );
    }
}

// ---------------------------------------------------------------------------
//
//
// Events
//
//
// ---------------------------------------------------------------------------

/// Waits for the export file dialog and writes the scene once a path was
/// chosen.
#[derive(new)]
pub struct ExportSceneRequested {
    thread_handle: Option<JoinHandle<Option<PathBuf>>>,
}

impl AppEvent for ExportSceneRequested {
    type App = EguiApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        if let Some(handle) = self.thread_handle.take_if(|handle| handle.is_finished()) {
            match handle.join() {
                Ok(Some(path)) => {
                    svg_export::scene::write_scene(
                        &path,
                        app.controls.state(),
                        app.config.svg_width,
                        app.config.svg_height,
                    )?;
                    log::debug!("exported scene to {:?}", path);
                }
                Ok(None) => (),
                Err(err) => {
                    log::error!("unable to export scene: {:?}", err)
                }
            };
            Ok(EventState::Finished)
        } else {
            Ok(EventState::Busy)
        }
    }
}
