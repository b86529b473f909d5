use std::io::Write;

use anyhow::Result as AnyResult;
use maze_chase_core::{CellCoord, Direction, InputEvent, Maze, Snapshot};
use maze_chase_rendering::{FrameInput, InputSource, MenuScreen, Renderer};

/// Cell-oriented renderer that writes frames as ASCII rows.
pub(crate) struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }

    fn glyph(maze: &Maze, snapshot: &Snapshot, cell: CellCoord) -> char {
        if cell == snapshot.player && cell == snapshot.pursuer {
            'X'
        } else if cell == snapshot.player {
            'P'
        } else if cell == snapshot.pursuer {
            'G'
        } else if snapshot.coins.contains(&cell) {
            'o'
        } else if maze.is_corridor(cell) {
            ' '
        } else {
            '#'
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn present(&mut self, maze: &Maze, snapshot: &Snapshot) -> AnyResult<()> {
        writeln!(
            self.out,
            "LEVEL: {} - POINTS: {}",
            snapshot.level, snapshot.score
        )?;
        for y in 0..maze.height() {
            for x in 0..maze.width() {
                let glyph = Self::glyph(maze, snapshot, CellCoord::new(x, y));
                write!(self.out, "{glyph}")?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn present_menu(&mut self, menu: &MenuScreen) -> AnyResult<()> {
        if let Some(score) = menu.final_score {
            writeln!(self.out, "You scored {score} points")?;
        }
        writeln!(self.out, "{}", MenuScreen::INSTRUCTIONS)?;
        Ok(())
    }
}

/// Scripted input source that rotates through the four directions.
///
/// Every `period` polls it releases the held key and presses the next
/// direction, exercising the same edge-trigger/re-trigger path a keyboard
/// backend would.
pub(crate) struct Autopilot {
    period: u32,
    frame: u32,
    held: Option<Direction>,
}

impl Autopilot {
    const ROTATION: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    pub(crate) fn new(period: u32) -> Self {
        Self {
            period: period.max(1),
            frame: 0,
            held: None,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self) -> AnyResult<FrameInput> {
        let mut input = FrameInput::default();
        if self.frame % self.period == 0 {
            if let Some(previous) = self.held.take() {
                input.events.push(InputEvent::Released(previous));
            }
            let next = Self::ROTATION[(self.frame / self.period) as usize % Self::ROTATION.len()];
            input.events.push(InputEvent::Pressed(next));
            self.held = Some(next);
        }
        self.frame += 1;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::{Autopilot, TextRenderer};
    use maze_chase_core::{Cell, CellCoord, Direction, InputEvent, Maze, Snapshot};
    use maze_chase_rendering::{InputSource, Renderer};

    #[test]
    fn frames_render_walls_agents_and_coins() {
        let maze = Maze::from_cells(3, 1, vec![Cell::Corridor; 3]).expect("maze");
        let snapshot = Snapshot {
            player: CellCoord::new(0, 0),
            pursuer: CellCoord::new(2, 0),
            pursuer_heading: Direction::Left,
            coins: vec![CellCoord::new(1, 0)],
            score: 0,
            level: 0,
        };

        let mut buffer = Vec::new();
        TextRenderer::new(&mut buffer)
            .present(&maze, &snapshot)
            .expect("present");
        let text = String::from_utf8(buffer).expect("utf8");
        assert_eq!(text, "LEVEL: 0 - POINTS: 0\nPoG\n");
    }

    #[test]
    fn autopilot_releases_before_the_next_press() {
        let mut autopilot = Autopilot::new(2);

        let first = autopilot.poll().expect("poll");
        assert_eq!(first.events, vec![InputEvent::Pressed(Direction::Right)]);

        let idle = autopilot.poll().expect("poll");
        assert!(idle.events.is_empty());

        let second = autopilot.poll().expect("poll");
        assert_eq!(
            second.events,
            vec![
                InputEvent::Released(Direction::Right),
                InputEvent::Pressed(Direction::Down),
            ]
        );
    }
}
