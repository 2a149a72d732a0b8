use std::io::Write;

use colored::{Color, Colorize};

use crate::models::Task;

pub const DONE_LABEL: &str = "✅ Concluída";
pub const PENDING_LABEL: &str = "❌ Pendente";
pub const NO_MATCH_NOTICE: &str = "(Nenhuma tarefa encontrada para o filtro informado.)";

/// Whether a stream should get ANSI colors.
pub fn color_enabled(no_color_flag: bool, is_terminal: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none() && is_terminal
}

/// Console side of a run. Writes to any sink so the output can be captured.
///
/// Console output never fails a run: the first write error is logged and
/// the rest of the output is dropped.
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
    broken: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Reporter {
            out,
            color,
            broken: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// A write to the sink has failed; nothing more is written.
    pub fn is_broken(&self) -> bool {
        self.broken
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn line(&mut self, text: &str) {
        if self.broken {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            log::warn!("console output stopped: {}", err);
            self.broken = true;
        }
    }

    pub fn starting(&mut self, endpoint: &str) {
        let line = self.paint(&format!("Iniciando consumo da API ({})", endpoint), Color::Blue);
        self.line(&line);
    }

    pub fn no_match(&mut self) {
        let line = if self.color {
            NO_MATCH_NOTICE.dimmed().to_string()
        } else {
            NO_MATCH_NOTICE.to_string()
        };
        self.line(&line);
    }

    pub fn tasks(&mut self, tasks: &[Task]) {
        let header = self.paint("⬇️  Tarefas:", Color::Yellow);
        self.line(&header);

        for task in tasks {
            if self.broken {
                break;
            }
            let status = if task.is_done() {
                self.paint(DONE_LABEL, Color::Green)
            } else {
                self.paint(PENDING_LABEL, Color::Red)
            };
            self.line(&format!("- {} [{}]", task.display_title(), status));
        }
    }

    pub fn saved(&mut self, path: &str) {
        let line = self.paint(&format!("Arquivo salvo em {}", path), Color::Magenta);
        self.line(&format!("\n{}", line));
    }
}
