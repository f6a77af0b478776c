/// Game tuning parameters for Pong
///
/// Distances are in pixels, speeds in pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 10.0; // Gap between a side wall and its paddle
    pub const PLAYER_STEP: f32 = 10.0;
    pub const TRACKING_SPEED: f32 = 5.0; // Opponent paddle, kept below MAX_BOUNCE_DY

    // Ball
    pub const BALL_SIZE: f32 = 7.0;
    pub const BALL_SPEED: f32 = 5.0; // Horizontal speed, constant for the whole rally
    pub const SERVE_DY_MIN: f32 = 2.0;
    pub const SERVE_DY_MAX: f32 = 4.0;
    pub const MAX_BOUNCE_DY: f32 = 6.0; // Vertical speed off a paddle edge

    // Score
    pub const WIN_SCORE: u32 = 5;

    // Driver
    pub const TICK_RATE: u32 = 60;
    pub const GAME_OVER_PAUSE_MS: u64 = 3000;
}
