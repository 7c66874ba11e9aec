//! Nesting-context tracking for a single parse session.

use crate::directives::Contexts;

/// A block-introducing directive that changes which directives are legal
/// inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Root,
    Events,
    Mail,
    Server,
    Stream,
    Upstream,
    Http,
    Location,
    If,
    LimitExcept,
}

impl Level {
    const ALL: [Level; 10] = [
        Level::Root,
        Level::Events,
        Level::Mail,
        Level::Server,
        Level::Stream,
        Level::Upstream,
        Level::Http,
        Level::Location,
        Level::If,
        Level::LimitExcept,
    ];

    /// The level introduced by a directive name, if it introduces one.
    /// `root` is never spelled in a file and has no directive name.
    pub fn from_name(name: &str) -> Option<Level> {
        match name {
            "events" => Some(Level::Events),
            "mail" => Some(Level::Mail),
            "server" => Some(Level::Server),
            "stream" => Some(Level::Stream),
            "upstream" => Some(Level::Upstream),
            "http" => Some(Level::Http),
            "location" => Some(Level::Location),
            "if" => Some(Level::If),
            "limit_except" => Some(Level::LimitExcept),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Root => "root",
            Level::Events => "events",
            Level::Mail => "mail",
            Level::Server => "server",
            Level::Stream => "stream",
            Level::Upstream => "upstream",
            Level::Http => "http",
            Level::Location => "location",
            Level::If => "if",
            Level::LimitExcept => "limit_except",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The set of levels currently open. Levels nest (a `location` inside a
/// `location`), so each keeps a depth counter; a level is "set" while its
/// counter is non-zero.
#[derive(Debug, Default, Clone)]
pub struct ContextStack {
    depth: [u32; Level::ALL.len()],
}

impl ContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: Level) {
        self.depth[level.index()] += 1;
        tracing::trace!(level = level.name(), depth = self.depth[level.index()], "push context");
    }

    /// Close a level opened by [`push`](Self::push).
    ///
    /// # Panics
    ///
    /// If `level` is not currently open: push/pop calls must balance.
    pub fn pop(&mut self, level: Level) {
        let d = &mut self.depth[level.index()];
        if *d == 0 {
            panic!(
                "context stack imbalance: pop of '{}' which is not open",
                level.name()
            );
        }
        *d -= 1;
        tracing::trace!(level = level.name(), depth = *d, "pop context");
    }

    pub fn is_set(&self, level: Level) -> bool {
        self.depth[level.index()] > 0
    }

    /// The open levels, in declaration order.
    pub fn open_levels(&self) -> Vec<Level> {
        Level::ALL.into_iter().filter(|l| self.is_set(*l)).collect()
    }

    /// The single most specific context flag for the open levels.
    ///
    /// # Panics
    ///
    /// If no level at all is open (the root level is pushed for the whole
    /// parse session, so this means push/pop went wrong).
    pub fn current(&self) -> Contexts {
        use Level::*;
        let on = |l: Level| self.is_set(l);

        if on(Http) && on(Location) && on(LimitExcept) {
            Contexts::HTTP_LMT
        } else if on(Http) && on(Location) && on(If) {
            Contexts::HTTP_LIF
        } else if on(Http) && on(Server) && on(If) {
            Contexts::HTTP_SIF
        } else if on(Http) && on(Location) {
            Contexts::HTTP_LOC
        } else if on(Http) && on(Upstream) {
            Contexts::HTTP_UPS
        } else if on(Http) && on(Server) {
            Contexts::HTTP_SRV
        } else if on(Http) {
            Contexts::HTTP_MAIN
        } else if on(Stream) && on(Upstream) {
            Contexts::STREAM_UPS
        } else if on(Stream) && on(Server) {
            Contexts::STREAM_SRV
        } else if on(Stream) {
            Contexts::STREAM_MAIN
        } else if on(Mail) && on(Server) {
            Contexts::MAIL_SRV
        } else if on(Mail) {
            Contexts::MAIL_MAIN
        } else if on(Events) {
            Contexts::EVENT
        } else if on(Root) {
            Contexts::MAIN
        } else {
            panic!(
                "no context level is open (open levels: {:?})",
                self.open_levels()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(levels: &[Level]) -> ContextStack {
        let mut s = ContextStack::new();
        s.push(Level::Root);
        for l in levels {
            s.push(*l);
        }
        s
    }

    #[test]
    fn root_alone_is_main() {
        assert_eq!(stack(&[]).current(), Contexts::MAIN);
    }

    #[test]
    fn http_narrows_progressively() {
        use Level::*;
        assert_eq!(stack(&[Http]).current(), Contexts::HTTP_MAIN);
        assert_eq!(stack(&[Http, Server]).current(), Contexts::HTTP_SRV);
        assert_eq!(stack(&[Http, Server, Location]).current(), Contexts::HTTP_LOC);
        assert_eq!(
            stack(&[Http, Server, Location, LimitExcept]).current(),
            Contexts::HTTP_LMT
        );
        assert_eq!(
            stack(&[Http, Server, Location, If]).current(),
            Contexts::HTTP_LIF
        );
        assert_eq!(stack(&[Http, Server, If]).current(), Contexts::HTTP_SIF);
        assert_eq!(stack(&[Http, Upstream]).current(), Contexts::HTTP_UPS);
    }

    #[test]
    fn stream_mail_and_events() {
        use Level::*;
        assert_eq!(stack(&[Stream]).current(), Contexts::STREAM_MAIN);
        assert_eq!(stack(&[Stream, Server]).current(), Contexts::STREAM_SRV);
        assert_eq!(stack(&[Stream, Upstream]).current(), Contexts::STREAM_UPS);
        assert_eq!(stack(&[Mail]).current(), Contexts::MAIL_MAIN);
        assert_eq!(stack(&[Mail, Server]).current(), Contexts::MAIL_SRV);
        assert_eq!(stack(&[Events]).current(), Contexts::EVENT);
    }

    #[test]
    fn nested_locations_pop_back_to_location() {
        use Level::*;
        let mut s = stack(&[Http, Server, Location, Location]);
        s.pop(Location);
        assert_eq!(s.current(), Contexts::HTTP_LOC);
        s.pop(Location);
        assert_eq!(s.current(), Contexts::HTTP_SRV);
    }

    #[test]
    #[should_panic(expected = "context stack imbalance")]
    fn popping_a_closed_level_panics() {
        let mut s = stack(&[Level::Http]);
        s.pop(Level::Server);
    }

    #[test]
    #[should_panic(expected = "no context level is open")]
    fn empty_stack_has_no_context() {
        ContextStack::new().current();
    }

    #[test]
    fn names_round_trip() {
        for l in Level::ALL.into_iter().filter(|l| *l != Level::Root) {
            assert_eq!(Level::from_name(l.name()), Some(l));
        }
        assert_eq!(Level::from_name("root"), None);
        assert_eq!(Level::from_name("map"), None);
    }
}
