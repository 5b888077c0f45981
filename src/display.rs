/// Rendering layer — all terminal drawing lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game. No game logic is performed; world coordinates are scaled onto
/// whatever terminal size the shell reports for this frame.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use glam::Vec2;
use laser_dodger::compute::countdown_display;
use laser_dodger::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use laser_dodger::entities::{Game, GamePhase};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_CREDIT: Color = Color::White;
const C_TITLE: Color = Color::Red;
const C_PROMPT: Color = Color::White;
const C_COUNTDOWN: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Magenta;
const C_LASER: Color = Color::DarkYellow;
const C_STARS_FAR: Color = Color::DarkBlue;
const C_STARS_NEAR: Color = Color::DarkGrey;
const C_HUD: Color = Color::White;
const C_GAME_OVER: Color = Color::Red;
const C_RESTART: Color = Color::Green;
const C_HINT: Color = Color::DarkGrey;

/// Terminal area a frame is drawn into.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    /// Map a world point onto a terminal cell, clamped to the viewport.
    fn cell(&self, world: Vec2) -> (u16, u16) {
        let cx = (world.x / SCREEN_WIDTH * self.cols as f32).floor();
        let cy = (world.y / SCREEN_HEIGHT * self.rows as f32).floor();
        (
            cx.clamp(0.0, self.cols.saturating_sub(1) as f32) as u16,
            cy.clamp(0.0, self.rows.saturating_sub(1) as f32) as u16,
        )
    }

    /// Row for a world `y`, used to place centred text.
    fn row(&self, world_y: f32) -> u16 {
        self.cell(Vec2::new(0.0, world_y)).1
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, game: &Game, view: Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match game.phase {
        GamePhase::Intro => draw_intro(out, view)?,
        GamePhase::Countdown => {
            if game.show_actors {
                draw_actors(out, game, view)?;
            }
            draw_countdown(out, game, view)?;
        }
        GamePhase::Gameplay => {
            draw_background(out, view)?;
            if game.show_actors {
                draw_actors(out, game, view)?;
                draw_lasers(out, game, view)?;
            }
            draw_round_timer(out, game, view)?;
        }
        GamePhase::GameOver => draw_game_over(out, game, view)?,
    }

    draw_controls_hint(out, view)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Text helpers ──────────────────────────────────────────────────────────────

fn centered_text<W: Write>(
    out: &mut W,
    view: Viewport,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (view.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Screens ───────────────────────────────────────────────────────────────────

fn draw_intro<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    centered_text(out, view, view.row(SCREEN_HEIGHT - 630.0), "Made by Franz", C_CREDIT)?;
    centered_text(out, view, view.row(SCREEN_HEIGHT / 2.0 - 10.0), "Laser Dodger", C_TITLE)?;
    centered_text(
        out,
        view,
        view.row(SCREEN_HEIGHT - 25.0).saturating_sub(1),
        "Press [SPACE] to Start",
        C_PROMPT,
    )?;
    Ok(())
}

fn draw_countdown<W: Write>(out: &mut W, game: &Game, view: Viewport) -> std::io::Result<()> {
    let text = countdown_display(game.countdown).to_string();
    centered_text(out, view, view.row(SCREEN_HEIGHT / 2.0 - 50.0), &text, C_COUNTDOWN)
}

fn draw_game_over<W: Write>(out: &mut W, game: &Game, view: Viewport) -> std::io::Result<()> {
    let mid = SCREEN_HEIGHT / 2.0;
    centered_text(out, view, view.row(mid - 40.0), "Game Over", C_GAME_OVER)?;
    let survived = format!("Survived: {} seconds", game.round_seconds);
    centered_text(out, view, view.row(mid + 10.0), &survived, C_HUD)?;
    centered_text(out, view, view.row(mid + 65.0), "Press [R] to restart", C_RESTART)?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

/// Two fixed star layers standing in for the backdrop images.
fn draw_background<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let layers: &[(u32, u32, &str, Color)] = &[
        (37, 11, "·", C_STARS_FAR),
        (23, 7, "*", C_STARS_NEAR),
    ];
    for &(stride, offset, glyph, color) in layers {
        out.queue(style::SetForegroundColor(color))?;
        for i in 0..(view.cols as u32 / 3).max(1) {
            let x = (i * stride + offset) % view.cols.max(1) as u32;
            let y = (i * (stride + offset) + offset) % view.rows.max(1) as u32;
            out.queue(cursor::MoveTo(x as u16, y as u16))?;
            out.queue(Print(glyph))?;
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_actors<W: Write>(out: &mut W, game: &Game, view: Viewport) -> std::io::Result<()> {
    let (px, py) = view.cell(game.player.pos);
    out.queue(cursor::MoveTo(px.saturating_sub(1), py))?;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(Print("/▲\\"))?;

    let (ex, ey) = view.cell(game.enemy.pos);
    out.queue(cursor::MoveTo(ex.saturating_sub(1), ey))?;
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    out.queue(Print("«▼»"))?;
    Ok(())
}

fn draw_lasers<W: Write>(out: &mut W, game: &Game, view: Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_LASER))?;
    for laser in game.projectiles.active() {
        let (x, y) = view.cell(laser.pos);
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(Print("●"))?;
    }
    Ok(())
}

fn draw_round_timer<W: Write>(out: &mut W, game: &Game, view: Viewport) -> std::io::Result<()> {
    let text = format!("Timer: {}", game.round_seconds);
    centered_text(out, view, 0, &text, C_HUD)
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   Q : Quit"))?;
    Ok(())
}
