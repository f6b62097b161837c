use std::io;
use std::time::Duration;

/// Something that happened while a colony is animating
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Event {
    /// Stop the animation
    Stop,

    /// Pause the animation, or resume it if it was paused
    TogglePause,

    /// The terminal was resized to `cols` x `rows` characters
    Resize { cols: u16, rows: u16 },
}

/// Where animation events come from
pub trait EventSource {
    /// Wait at most `timeout` for the next event. Returns `None` if nothing happened in time.
    fn wait(&mut self, timeout: Duration) -> io::Result<Option<Event>>;

    /// Called before an animation starts
    fn begin(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Called after an animation ends, even if it ended with an error
    fn end(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<E: EventSource + ?Sized> EventSource for &mut E {
    fn wait(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        (**self).wait(timeout)
    }

    fn begin(&mut self) -> io::Result<()> {
        (**self).begin()
    }

    fn end(&mut self) -> io::Result<()> {
        (**self).end()
    }
}
