use std::io;
use std::io::BufRead;
use std::io::Write;
use std::time::Duration;

use crossterm::cursor;
use crossterm::event;
use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use crossterm::execute;
use crossterm::terminal;

use crate::driver::Prompt;
use crate::events::Event;
use crate::events::EventSource;

/// Converts a crossterm event into a colony event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::Stop),
            KeyEvent {
                code: KeyCode::Char(' ') | KeyCode::Char('p'),
                ..
            } => Some(Event::TogglePause),
            _ => None,
        },
        CrossTermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(_),
            ..
        }) => Some(Event::Stop),
        CrossTermEvent::Resize(cols, rows) => Some(Event::Resize { cols, rows }),
        _ => None,
    }
}

/// Reads events from the terminal.
///
/// While an animation runs the terminal is in raw mode with mouse capture on, so that a single
/// key press or click is enough to stop it.
#[derive(Default)]
pub struct TerminalEvents {
    raw: bool,
}

impl TerminalEvents {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSource for TerminalEvents {
    fn wait(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        Ok(convert_event(event::read()?))
    }

    fn begin(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;

        execute!(io::stdout(), event::EnableMouseCapture, cursor::Hide)
    }

    fn end(&mut self) -> io::Result<()> {
        if !self.raw {
            return Ok(());
        }

        self.raw = false;
        execute!(io::stdout(), event::DisableMouseCapture, cursor::Show)?;

        terminal::disable_raw_mode()
    }
}

impl Drop for TerminalEvents {
    fn drop(&mut self) {
        // Never leave the terminal in raw mode
        let _ = self.end();
    }
}

/// Line based prompts over a reader and a writer, usually stdin and stdout.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn get_ref(&self) -> &W {
        &self.output
    }
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let line = line.trim_end_matches(['\r', '\n']).to_string();

        Ok(Some(line))
    }
}
