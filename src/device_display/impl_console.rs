use crate::device_display::interface::DeviceDisplay;
use crate::sampling_loop::view::View;
use std::error::Error;

const WIDTH: usize = 40;

/// Prints a box to stdout, only when the text would change.
#[derive(Default)]
pub struct DeviceDisplayConsole {
    last_lines: Vec<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self::default()
    }

    fn lines(view: &View) -> Vec<String> {
        let header = match (view.loop_active, view.training) {
            (false, _) => "Detection stopped".to_string(),
            (true, Some(class)) => format!("Detecting, training class {}", class),
            (true, None) => "Detecting".to_string(),
        };

        let mut lines = vec![header];
        for status in &view.classes {
            let marker = if status.selected { '>' } else { ' ' };
            lines.push(format!("{} {}: {}", marker, status.label, status.describe()));
        }
        lines
    }

    fn render_display(lines: &[String]) {
        println!("┌{}┐", "─".repeat(WIDTH));
        for line in lines {
            let text: String = line.chars().take(WIDTH).collect();
            println!("│{:<width$}│", text, width = WIDTH);
        }
        println!("└{}┘", "─".repeat(WIDTH));
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.last_lines.clear();
        Ok(())
    }

    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        let lines = Self::lines(view);
        if lines != self.last_lines {
            Self::render_display(&lines);
            self.last_lines = lines;
        }
        Ok(())
    }
}
