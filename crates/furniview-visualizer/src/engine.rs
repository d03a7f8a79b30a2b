//! Scene engine thread.
//!
//! The UI thread owns the design. The engine thread owns the scene graph
//! and the camera, and publishes a snapshot after every batch of work.
//! Design submissions collapse latest-wins; view commands are applied in
//! submission order after the pending design.
//!
//! ```text
//! UI thread                      scene-engine thread
//!   set_design ──► Inbox ──────►   rebuild SceneGraph
//!   drag/scroll ─► (Mutex+Condvar) apply commands
//!   snapshot() ◄── RwLock ◄──────  publish SceneSnapshot
//! ```

use std::fmt;
use std::io;
use std::mem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::{Condvar, Mutex, RwLock};
use tracing::{debug, info, warn};

use furniview_core::{Design, FurnitureId};

use crate::camera::Camera3D;
use crate::scene::{SceneGraph, ViewOverrides};

/// Name of the engine thread.
pub const ENGINE_THREAD_NAME: &str = "scene-engine";

/// Lifecycle of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// The thread has not started; submissions are held.
    #[default]
    Uninitialized,
    /// Running with no design.
    InitializedEmpty,
    /// Running with a design in the scene.
    InitializedWithDesign,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "Uninitialized"),
            Self::InitializedEmpty => write!(f, "Initialized (empty)"),
            Self::InitializedWithDesign => write!(f, "Initialized (with design)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Visibility(FurnitureId, bool),
    Shading(FurnitureId, f64),
    RotateView(f64, f64),
    ResetView,
    Drag(f64, f64),
    Scroll(f64),
    ClearOverrides,
}

#[derive(Default)]
struct Inbox {
    /// Latest unapplied design. `Some(None)` clears the scene.
    design: Option<Option<Design>>,
    commands: Vec<Command>,
    submitted: u64,
    shutdown: bool,
}

impl Inbox {
    fn is_idle(&self) -> bool {
        self.design.is_none() && self.commands.is_empty()
    }
}

/// What the engine last published.
#[derive(Debug, Clone)]
pub struct SceneSnapshot {
    pub state: EngineState,
    pub graph: Arc<SceneGraph>,
    pub camera: Camera3D,
    pub rebuilds: u64,
}

impl Default for SceneSnapshot {
    fn default() -> Self {
        Self {
            state: EngineState::Uninitialized,
            graph: Arc::new(SceneGraph::placeholder()),
            camera: Camera3D::default(),
            rebuilds: 0,
        }
    }
}

struct EngineShared {
    inbox: Mutex<Inbox>,
    wake: Condvar,
    applied: Mutex<u64>,
    applied_cv: Condvar,
    published: RwLock<SceneSnapshot>,
    running: AtomicBool,
}

/// Cloneable command surface of a [`SceneEngine`].
///
/// Every command is fire-and-forget. Use [`SceneHandle::flush`] to wait for
/// the engine to catch up.
#[derive(Clone)]
pub struct SceneHandle {
    shared: Arc<EngineShared>,
}

impl SceneHandle {
    /// Queue a design for display, replacing any design not yet applied.
    pub fn set_design(&self, design: Option<Design>) {
        self.submit(|inbox| {
            if inbox.design.replace(design).is_some() {
                debug!("Replaced pending design update");
            }
        });
    }

    pub fn set_visibility(&self, id: FurnitureId, visible: bool) {
        self.push(Command::Visibility(id, visible));
    }

    pub fn apply_shading(&self, id: FurnitureId, intensity: f64) {
        self.push(Command::Shading(id, intensity));
    }

    /// Make every item visible again and drop shading.
    pub fn clear_overrides(&self) {
        self.push(Command::ClearOverrides);
    }

    pub fn rotate_view(&self, x_deg: f64, y_deg: f64) {
        self.push(Command::RotateView(x_deg, y_deg));
    }

    pub fn reset_view(&self) {
        self.push(Command::ResetView);
    }

    pub fn drag(&self, dx: f64, dy: f64) {
        self.push(Command::Drag(dx, dy));
    }

    pub fn scroll(&self, delta: f64) {
        self.push(Command::Scroll(delta));
    }

    /// Latest published scene and camera.
    pub fn snapshot(&self) -> SceneSnapshot {
        self.shared.published.read().clone()
    }

    pub fn state(&self) -> EngineState {
        self.shared.published.read().state
    }

    /// Number of scene graph rebuilds caused by design updates.
    pub fn rebuild_count(&self) -> u64 {
        self.shared.published.read().rebuilds
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Block until everything submitted so far has been applied. Returns
    /// immediately when the engine thread is not running.
    pub fn flush(&self) {
        let target = self.shared.inbox.lock().submitted;
        let mut applied = self.shared.applied.lock();
        while *applied < target && self.is_running() {
            self.shared.applied_cv.wait(&mut applied);
        }
    }

    fn push(&self, command: Command) {
        self.submit(|inbox| inbox.commands.push(command));
    }

    fn submit(&self, apply: impl FnOnce(&mut Inbox)) {
        let mut inbox = self.shared.inbox.lock();
        if inbox.shutdown {
            debug!("Scene engine is shut down, dropping update");
            return;
        }
        apply(&mut inbox);
        inbox.submitted += 1;
        self.shared.wake.notify_one();
    }
}

/// Owns the engine thread.
///
/// Created in the [`EngineState::Uninitialized`] state; submissions made
/// before [`SceneEngine::start`] are held and applied once the thread is up.
pub struct SceneEngine {
    handle: SceneHandle,
    thread: Option<JoinHandle<()>>,
}

impl Default for SceneEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneEngine {
    pub fn new() -> Self {
        Self {
            handle: SceneHandle {
                shared: Arc::new(EngineShared {
                    inbox: Mutex::new(Inbox::default()),
                    wake: Condvar::new(),
                    applied: Mutex::new(0),
                    applied_cv: Condvar::new(),
                    published: RwLock::new(SceneSnapshot::default()),
                    running: AtomicBool::new(false),
                }),
            },
            thread: None,
        }
    }

    /// Create and start an engine.
    pub fn spawn() -> io::Result<Self> {
        let mut engine = Self::new();
        engine.start()?;
        Ok(engine)
    }

    /// Start the engine thread. Does nothing if it is already running.
    pub fn start(&mut self) -> io::Result<()> {
        if self.thread.is_some() {
            return Ok(());
        }
        let shared = self.handle.shared.clone();
        shared.running.store(true, Ordering::Release);
        let spawned = thread::Builder::new()
            .name(ENGINE_THREAD_NAME.to_string())
            .spawn(move || run(shared));
        match spawned {
            Ok(thread) => {
                self.thread = Some(thread);
                info!("Scene engine started");
                Ok(())
            }
            Err(e) => {
                self.handle.shared.running.store(false, Ordering::Release);
                Err(e)
            }
        }
    }

    pub fn handle(&self) -> SceneHandle {
        self.handle.clone()
    }

    pub fn set_design(&self, design: Option<Design>) {
        self.handle.set_design(design);
    }

    pub fn set_visibility(&self, id: FurnitureId, visible: bool) {
        self.handle.set_visibility(id, visible);
    }

    pub fn apply_shading(&self, id: FurnitureId, intensity: f64) {
        self.handle.apply_shading(id, intensity);
    }

    pub fn rotate_view(&self, x_deg: f64, y_deg: f64) {
        self.handle.rotate_view(x_deg, y_deg);
    }

    pub fn reset_view(&self) {
        self.handle.reset_view();
    }

    pub fn drag(&self, dx: f64, dy: f64) {
        self.handle.drag(dx, dy);
    }

    pub fn scroll(&self, delta: f64) {
        self.handle.scroll(delta);
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        self.handle.snapshot()
    }

    pub fn state(&self) -> EngineState {
        self.handle.state()
    }

    pub fn rebuild_count(&self) -> u64 {
        self.handle.rebuild_count()
    }

    pub fn flush(&self) {
        self.handle.flush();
    }

    /// Apply what is queued, then stop the thread. Later submissions are
    /// dropped.
    pub fn shutdown(&mut self) {
        {
            let mut inbox = self.handle.shared.inbox.lock();
            inbox.shutdown = true;
            self.handle.shared.wake.notify_all();
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("Scene engine thread panicked");
            }
            info!("Scene engine stopped");
        }
    }
}

impl Drop for SceneEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Marks the engine stopped when the thread exits, however it exits.
struct RunningGuard(Arc<EngineShared>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        let _applied = self.0.applied.lock();
        self.0.running.store(false, Ordering::Release);
        self.0.applied_cv.notify_all();
    }
}

/// State owned by the engine thread.
struct Worker {
    design: Option<Design>,
    overrides: ViewOverrides,
    graph: SceneGraph,
    camera: Camera3D,
    rebuilds: u64,
    state: EngineState,
}

impl Worker {
    fn new() -> Self {
        Self {
            design: None,
            overrides: ViewOverrides::default(),
            graph: SceneGraph::placeholder(),
            camera: Camera3D::default(),
            rebuilds: 0,
            state: EngineState::InitializedEmpty,
        }
    }

    fn apply_design(&mut self, design: Option<Design>) {
        let same_design = matches!(
            (&self.design, &design),
            (Some(current), Some(next)) if current.id == next.id
        );
        if !same_design {
            self.overrides.clear();
        }
        self.graph = SceneGraph::build(design.as_ref(), &self.overrides);
        self.state = if design.is_some() {
            EngineState::InitializedWithDesign
        } else {
            EngineState::InitializedEmpty
        };
        self.design = design;
        self.rebuilds += 1;
    }

    fn apply_command(&mut self, command: Command) {
        match command {
            Command::Visibility(id, visible) => {
                self.overrides.visibility.insert(id, visible);
                if !self.graph.set_visibility(id, visible) {
                    debug!("Visibility for {} not in scene", id);
                }
            }
            Command::Shading(id, intensity) => {
                self.overrides.shading.insert(id, intensity);
                if !self.graph.apply_shading(id, intensity) {
                    debug!("Shading for {} not in scene", id);
                }
            }
            Command::ClearOverrides => {
                self.overrides.clear();
                self.graph.clear_overrides();
            }
            Command::RotateView(x, y) => self.camera.set_rotation(x, y),
            Command::ResetView => self.camera.reset(),
            Command::Drag(dx, dy) => self.camera.drag(dx, dy),
            Command::Scroll(delta) => self.camera.scroll(delta),
        }
    }

    fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            state: self.state,
            graph: Arc::new(self.graph.clone()),
            camera: self.camera,
            rebuilds: self.rebuilds,
        }
    }
}

fn run(shared: Arc<EngineShared>) {
    let _guard = RunningGuard(shared.clone());
    let mut worker = Worker::new();
    *shared.published.write() = worker.snapshot();
    debug!("Scene engine ready");

    loop {
        let (design, commands, seq) = {
            let mut inbox = shared.inbox.lock();
            while inbox.is_idle() && !inbox.shutdown {
                shared.wake.wait(&mut inbox);
            }
            if inbox.is_idle() {
                break;
            }
            (
                inbox.design.take(),
                mem::take(&mut inbox.commands),
                inbox.submitted,
            )
        };

        if let Some(design) = design {
            worker.apply_design(design);
        }
        for command in commands {
            worker.apply_command(command);
        }
        *shared.published.write() = worker.snapshot();

        let mut applied = shared.applied.lock();
        *applied = seq;
        shared.applied_cv.notify_all();
    }
}
