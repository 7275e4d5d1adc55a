//! Time management utilities

use std::time::{Duration, Instant};

/// Default upper bound for a single frame's delta time, in seconds
pub const DEFAULT_MAX_DELTA_TIME: f32 = 0.1;

/// High-precision timer for frame timing
///
/// Delta time is clamped to `max_delta_time` so that a long stall (window drag,
/// debugger pause) does not feed one huge step into force integration.
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    max_delta_time: f32,
    total_time: f32,
    frame_count: u64,
    fps_accumulator: f32,
    fps_frames: u32,
    current_fps: f32,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer with the default delta clamp
    pub fn new() -> Self {
        Self::with_max_delta(DEFAULT_MAX_DELTA_TIME)
    }
    
    /// Create a new timer clamping each delta to `max_delta_time` seconds
    pub fn with_max_delta(max_delta_time: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            max_delta_time,
            total_time: 0.0,
            frame_count: 0,
            fps_accumulator: 0.0,
            fps_frames: 0,
            current_fps: 0.0,
        }
    }
    
    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed.as_secs_f32());
    }
    
    /// Advance the timer by an explicit raw delta (fixed-step loops and tests)
    pub fn advance(&mut self, raw_delta: f32) {
        self.delta_time = raw_delta.clamp(0.0, self.max_delta_time);
        self.total_time += self.delta_time;
        self.frame_count += 1;
        
        // FPS estimate refreshed once per accumulated second
        self.fps_accumulator += self.delta_time;
        self.fps_frames += 1;
        if self.fps_accumulator >= 1.0 {
            self.current_fps = self.fps_frames as f32 / self.fps_accumulator;
            self.fps_accumulator = 0.0;
            self.fps_frames = 0;
        }
    }
    
    /// Reset all accumulated time and restart from now
    pub fn reset(&mut self) {
        *self = Self::with_max_delta(self.max_delta_time);
    }
    
    /// Get the (clamped) time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }
    
    /// Get the delta clamp in seconds
    pub fn max_delta_time(&self) -> f32 {
        self.max_delta_time
    }
    
    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }
    
    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
    
    /// Get the FPS measured over the last full second
    pub fn fps(&self) -> f32 {
        self.current_fps
    }
}

/// Simple stopwatch for measuring elapsed time
pub struct Stopwatch {
    start_time: Option<Instant>,
    elapsed: Duration,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Create a new stopped stopwatch
    pub fn new() -> Self {
        Self {
            start_time: None,
            elapsed: Duration::ZERO,
        }
    }
    
    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }
    
    /// Start the stopwatch
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }
    
    /// Stop the stopwatch and accumulate elapsed time
    pub fn stop(&mut self) {
        if let Some(start) = self.start_time {
            self.elapsed += start.elapsed();
            self.start_time = None;
        }
    }
    
    /// Get the elapsed time
    pub fn elapsed(&self) -> Duration {
        let current_elapsed = self.start_time.map_or(Duration::ZERO, |start| start.elapsed());
        self.elapsed + current_elapsed
    }
    
    /// Get the elapsed time in milliseconds
    pub fn elapsed_millis(&self) -> f32 {
        self.elapsed().as_secs_f32() * 1000.0
    }
}
