use std::io::{self, Write};

use game_core::RenderSnapshot;

/// Prints the scoreboard whenever it changes, and the winner at game over
#[derive(Debug, Default)]
pub struct TextRenderer {
    last: Option<(u32, u32, bool)>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render<W: Write>(&mut self, snapshot: &RenderSnapshot, out: &mut W) -> io::Result<()> {
        let key = (snapshot.player_score, snapshot.ai_score, snapshot.game_over);
        if self.last == Some(key) {
            return Ok(());
        }
        self.last = Some(key);

        writeln!(
            out,
            "Player {:>2} - {:<2} AI   (first to {})",
            snapshot.player_score, snapshot.ai_score, snapshot.max_score
        )?;
        if let Some(label) = snapshot.winner {
            writeln!(out, "{label}")?;
        }
        Ok(())
    }

    /// Forget what was last drawn so the next frame prints again
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
