use glam::Vec2;
use lightemall::bridge::protocol::{cell_bytes, pack_cells};
use lightemall::{
    BoardError, BoardLayout, CellRecord, GameConfig, GameEvent, InputEvent, InputQueue, Intent,
    LightEmAll,
};

/// Wires the game controller to the browser.
///
/// Input events are queued by the wasm exports and decoded on `tick()`;
/// direct commands apply immediately. After either, the packed cell buffer
/// is rebuilt so JS can read it straight out of wasm memory.
pub struct GameRunner {
    game: LightEmAll,
    input: InputQueue,
    layout: BoardLayout,
    /// Width the layout is fitted to; re-fitted whenever the board changes.
    fit_width: Option<f32>,
    cells: Vec<CellRecord>,
    /// Events since the start of the last tick.
    events: Vec<GameEvent>,
}

impl GameRunner {
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let game = LightEmAll::new(config)?;
        let mut runner = Self {
            cells: Vec::with_capacity(game.board().len()),
            game,
            input: InputQueue::new(),
            layout: BoardLayout::default(),
            fit_width: None,
            events: Vec::new(),
        };
        runner.sync();
        Ok(runner)
    }

    pub fn game(&self) -> &LightEmAll {
        &self.game
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Use a fixed layout. It is kept as is across resizes.
    pub fn set_layout(&mut self, layout: BoardLayout) {
        self.layout = layout;
        self.fit_width = None;
    }

    /// Size cells so the board spans `available_width`, and keep doing so
    /// after every resize.
    pub fn fit_layout(&mut self, origin: Vec2, available_width: f32) {
        self.layout = self.layout.with_origin(origin);
        self.fit_width = Some(available_width);
        self.refit();
    }

    fn refit(&mut self) {
        if let Some(width) = self.fit_width {
            self.layout = BoardLayout::fit(self.game.width(), width).with_origin(self.layout.origin);
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Decode and apply all queued input. Returns how many intents were accepted.
    pub fn tick(&mut self) -> usize {
        self.events.clear();

        let mut accepted = 0;
        for event in self.input.drain() {
            let intent = Intent::from_event(
                &event,
                &self.layout,
                self.game.width(),
                self.game.height(),
            );
            if let Some(intent) = intent {
                if self.game.apply(intent) {
                    accepted += 1;
                }
            }
        }

        self.sync();
        accepted
    }

    /// Apply one intent right away.
    pub fn apply(&mut self, intent: Intent) -> bool {
        let accepted = self.game.apply(intent);
        self.sync();
        accepted
    }

    /// Resize, surfacing the dimension error to the caller.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), BoardError> {
        let result = self.game.resize(width, height);
        self.sync();
        result
    }

    fn sync(&mut self) {
        self.refit();
        pack_cells(self.game.board(), &mut self.cells);
        self.events.extend(self.game.drain_events());
    }

    pub fn snapshot_json(&self) -> String {
        match self.game.snapshot().to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("snapshot serialization failed: {}", e);
                String::from("{}")
            }
        }
    }

    // ---- Pointer accessors for direct wasm memory reads ----

    pub fn cells_ptr(&self) -> *const u8 {
        cell_bytes(&self.cells).as_ptr()
    }

    pub fn cell_count(&self) -> u32 {
        self.cells.len() as u32
    }

    pub fn cells(&self) -> &[CellRecord] {
        &self.cells
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.events.len() as u32
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}
