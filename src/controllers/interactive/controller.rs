use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::render_frame::render_frame::render_cancelable;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

impl SharedState {
    fn lock_latest_request(&self) -> MutexGuard<'_, Option<(u64, RenderRequest)>> {
        self.latest_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Presents `frame` only if no newer request exists. Generations are
    /// bumped under the same lock, so a submission cannot slip in between the
    /// check and the hand-off.
    fn present_if_current(&self, frame: FrameData) -> bool {
        let _guard = self.lock_latest_request();

        if frame.generation != self.generation.load(Ordering::Acquire) {
            return false;
        }

        let generation = frame.generation;
        self.presenter_port.present(frame);
        self.last_completed_generation
            .store(generation, Ordering::Release);

        true
    }
}

/// Renders the newest submitted snapshot on a background thread.
///
/// Submitting a request bumps the generation counter; any pass still running
/// for an older generation notices on its next cancellation check and is
/// dropped without being presented.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = {
            let mut guard = self.shared.lock_latest_request();
            let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *guard = Some((generation, request));
            generation
        };
        self.shared.wake.notify_one();

        log::debug!(
            "submitted generation {generation}: {}x{} at {} iterations",
            request.grid.width(),
            request.grid.height(),
            request.max_iterations
        );

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.lock_latest_request();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break job;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = render_cancelable(
                request.viewport,
                request.grid,
                request.max_iterations,
                &cancel_token,
            );
            let render_duration = start.elapsed();

            match result {
                Ok(raster) => {
                    let presented = shared.present_if_current(FrameData {
                        generation: job_generation,
                        request,
                        raster,
                        render_duration,
                    });

                    if presented {
                        log::debug!(
                            "generation {job_generation} rendered in {} ms",
                            render_duration.as_millis()
                        );
                    } else {
                        log::trace!("discarding superseded generation {job_generation}");
                    }
                }
                Err(Cancelled) => {
                    log::trace!("cancelled generation {job_generation}");
                }
            }
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
