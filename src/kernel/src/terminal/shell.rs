//! The interactive read loop.
//!
//! Two phases. `Welcome` waits for the start key and throws everything else
//! away. `Reading` echoes characters and re-prompts on Enter, forever.

use super::line::{LineBuffer, LineSink};
use crate::config::ShellConfig;
use crate::display::Display;
use crate::input::{KeyAction, KeyEvent, Ps2Controller};
use oops_hal::{CursorDevice, PortIo, TextBuffer};

/// Where the shell is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the start key.
    Welcome,
    /// Echoing input. Never left.
    Reading,
}

/// Prompt/echo state machine.
pub struct Shell<S> {
    config: ShellConfig,
    phase: Phase,
    /// Text typed since the last prompt, for the sink.
    line: LineBuffer,
    /// Set once the current line has overflowed, so it is only logged once.
    truncated: bool,
    sink: S,
}

impl<S: LineSink> Shell<S> {
    /// Creates a shell in the `Welcome` phase.
    pub fn new(config: ShellConfig, sink: S) -> Self {
        Shell {
            config,
            phase: Phase::Welcome,
            line: LineBuffer::new(),
            truncated: false,
            sink,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Text of the line being typed.
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// The line sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Runs the shell forever.
    ///
    /// Scheduling is a busy poll of the controller status register with no
    /// yield: this owns the CPU. A multitasking kernel would feed
    /// [`Shell::handle_event`] from an interrupt-driven queue instead.
    pub fn run<B, C, P>(
        mut self,
        keyboard: &mut Ps2Controller<P>,
        display: &mut Display<B, C>,
    ) -> !
    where
        B: TextBuffer,
        C: CursorDevice,
        P: PortIo,
    {
        loop {
            if !self.poll(keyboard, display) {
                core::hint::spin_loop();
            }
        }
    }

    /// Handles at most one pending key event. Returns false if none was
    /// pending.
    pub fn poll<B, C, P>(
        &mut self,
        keyboard: &mut Ps2Controller<P>,
        display: &mut Display<B, C>,
    ) -> bool
    where
        B: TextBuffer,
        C: CursorDevice,
        P: PortIo,
    {
        match keyboard.poll_event() {
            Some(event) => {
                self.handle_event(event, display);
                true
            }
            None => false,
        }
    }

    /// Feeds one key event through the state machine.
    pub fn handle_event<B, C>(&mut self, event: KeyEvent, display: &mut Display<B, C>)
    where
        B: TextBuffer,
        C: CursorDevice,
    {
        match self.phase {
            Phase::Welcome => {
                if event.scancode == self.config.start_key {
                    self.start(display);
                }
            }
            Phase::Reading => match event.action() {
                KeyAction::Release | KeyAction::Ignored => {}
                KeyAction::Submit => self.submit(display),
                KeyAction::Char(byte) => self.echo(byte, display),
            },
        }
    }

    fn start<B: TextBuffer, C: CursorDevice>(&mut self, display: &mut Display<B, C>) {
        display.clear(self.config.foreground, self.config.background);
        display.home();
        self.phase = Phase::Reading;
        log::debug!("shell started");
        self.prompt(display);
    }

    fn submit<B: TextBuffer, C: CursorDevice>(&mut self, display: &mut Display<B, C>) {
        log::trace!("submit ({} bytes)", self.line.len());
        self.sink.line_submitted(self.line.as_str());
        self.line.clear();
        self.truncated = false;
        self.prompt(display);
    }

    fn echo<B: TextBuffer, C: CursorDevice>(&mut self, byte: u8, display: &mut Display<B, C>) {
        display.put_char(byte);
        if let Err(err) = self.line.push(byte) {
            if !self.truncated {
                log::warn!("{}; rest of line is echoed but not captured", err);
                self.truncated = true;
            }
        }
    }

    fn prompt<B: TextBuffer, C: CursorDevice>(&self, display: &mut Display<B, C>) {
        display.put_char(b'\n');
        display.write_string(self.config.prompt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{HEIGHT, WIDTH};
    use crate::input::scancode::ENTER;
    use crate::terminal::line::MAX_LINE_LENGTH;
    use crate::testutil::mock::{MemoryBuffer, MockCursor, MockPorts, RecordingSink};
    use oops_common::{Color, ColorCode, ScreenChar};

    const H: u8 = 0x23;
    const I: u8 = 0x17;
    const LSHIFT: u8 = 0x2A;

    type TestDisplay = Display<MemoryBuffer, MockCursor>;

    fn display() -> TestDisplay {
        let mut display = Display::new(MemoryBuffer::new(), MockCursor::new());
        display.initialize();
        display
    }

    fn feed(shell: &mut Shell<RecordingSink>, display: &mut TestDisplay, scancodes: &[u8]) {
        let mut keyboard = Ps2Controller::new(MockPorts::with_scancodes(scancodes));
        while shell.poll(&mut keyboard, display) {}
        assert_eq!(keyboard.ports().pending(), 0);
    }

    fn started() -> (Shell<RecordingSink>, TestDisplay) {
        let mut shell = Shell::new(ShellConfig::DEFAULT, RecordingSink::new());
        let mut display = display();
        feed(&mut shell, &mut display, &[ENTER, ENTER | 0x80]);
        (shell, display)
    }

    fn text(display: &TestDisplay, row: usize, columns: core::ops::Range<usize>) -> Vec<u8> {
        columns
            .map(|column| display.cell(row, column).ascii_character)
            .collect()
    }

    #[test]
    fn test_welcome_ignores_everything_but_start_key() {
        let mut shell = Shell::new(ShellConfig::DEFAULT, RecordingSink::new());
        let mut display = display();
        display.write_string("Press ENTER");

        feed(&mut shell, &mut display, &[H, H | 0x80, I, 0x39, LSHIFT]);

        assert_eq!(shell.phase(), Phase::Welcome);
        assert_eq!(text(&display, 0, 0..11), b"Press ENTER");
        assert_eq!(display.position(), (0, 11));
        assert!(shell.sink().lines().is_empty());
    }

    #[test]
    fn test_start_key_clears_homes_and_prompts() {
        let mut shell = Shell::new(ShellConfig::DEFAULT, RecordingSink::new());
        let mut display = display();
        display.set_write_color(ColorCode::new(Color::Cyan, Color::Black));
        for _ in 0..7 {
            display.write_string("banner line\n");
        }

        feed(&mut shell, &mut display, &[ENTER]);

        assert_eq!(shell.phase(), Phase::Reading);
        assert_eq!(display.write_color(), ColorCode::DEFAULT);
        let blank = ScreenChar::blank(ColorCode::DEFAULT);
        for row in (0..HEIGHT).filter(|&row| row != 1) {
            for column in 0..WIDTH {
                assert_eq!(display.cell(row, column), blank);
            }
        }
        assert_eq!(text(&display, 1, 0..2), b"> ");
        assert_eq!(display.position(), (1, 2));
    }

    #[test]
    fn test_echo_and_submit_scenario() {
        let (mut shell, mut display) = started();
        let (row, _) = display.position();

        feed(&mut shell, &mut display, &[H, H | 0x80, I, I | 0x80, ENTER, ENTER | 0x80]);

        assert_eq!(text(&display, row, 0..4), b"> hi");
        assert_eq!(text(&display, row + 1, 0..2), b"> ");
        assert_eq!(display.position(), (row + 1, ShellConfig::DEFAULT.prompt.len()));
        assert_eq!(display.cursor_device().offset(), Some(((row + 1) * WIDTH + 2) as u16));
        assert_eq!(shell.sink().lines(), &["hi"]);
        assert_eq!(shell.line(), "");
    }

    #[test]
    fn test_releases_and_unmapped_keys_are_ignored() {
        let (mut shell, mut display) = started();
        let before = display.position();

        feed(&mut shell, &mut display, &[LSHIFT, 0x3B, 0x9E, LSHIFT | 0x80]);

        assert_eq!(display.position(), before);
        assert_eq!(shell.line(), "");
    }

    #[test]
    fn test_empty_submit_still_reaches_sink() {
        let (mut shell, mut display) = started();
        feed(&mut shell, &mut display, &[ENTER, ENTER]);
        assert_eq!(shell.sink().lines(), &["", ""]);
        assert_eq!(display.position(), (3, 2));
    }

    #[test]
    fn test_overlong_line_is_echoed_but_truncated() {
        let (mut shell, mut display) = started();
        let keys = [H; MAX_LINE_LENGTH + 10];
        feed(&mut shell, &mut display, &keys);
        feed(&mut shell, &mut display, &[ENTER]);

        let lines = shell.sink().lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), MAX_LINE_LENGTH);

        // 2 prompt cells + 266 echoed characters, starting on row 1.
        let echoed = 2 + MAX_LINE_LENGTH + 10;
        assert_eq!(display.cell(1 + echoed / WIDTH, echoed % WIDTH - 1).ascii_character, b'h');
    }

    #[test]
    fn test_custom_prompt_and_start_key() {
        let config = ShellConfig {
            prompt: "$ ",
            start_key: 0x39,
            ..ShellConfig::DEFAULT
        };
        let mut shell = Shell::new(config, RecordingSink::new());
        let mut display = display();

        feed(&mut shell, &mut display, &[ENTER]);
        assert_eq!(shell.phase(), Phase::Welcome);

        feed(&mut shell, &mut display, &[0x39, I]);
        assert_eq!(shell.phase(), Phase::Reading);
        assert_eq!(text(&display, 1, 0..3), b"$ i");
    }

    #[test]
    fn test_poll_with_idle_keyboard() {
        let mut shell = Shell::new(ShellConfig::DEFAULT, ());
        let mut display = display();
        let mut keyboard = Ps2Controller::new(MockPorts::new());
        assert!(!shell.poll(&mut keyboard, &mut display));
        assert_eq!(shell.phase(), Phase::Welcome);
    }
}
