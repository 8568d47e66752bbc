//! Optional instrumentation for grammar construction.
//!
//! [`named`] is a construction-time hook meant to wrap every parser a
//! grammar gives a name to. Built normally it is an identity function
//! and costs nothing. Built with the `trace` cargo feature it wraps the
//! parser with counters and timers, can stream an indented entry/exit
//! trace of a parse to a caller-supplied sink, and can dump a table of
//! per-parser timings. The wrapper never changes matching semantics:
//! successes, failures, positions, and nodes are exactly those of the
//! wrapped parser.

#[cfg(not(feature = "trace"))]
mod imp {
    use crate::parser::Parser;

    /// Identity hook: returns the parser unchanged.
    #[inline]
    pub fn named<'code, P>(_label: &str, parser: P) -> P
    where
        P: Parser<'code>,
    {
        parser
    }
}

#[cfg(feature = "trace")]
mod imp {
    use std::cell::{Cell, RefCell};
    use std::io::{self, Write};
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use crate::node::Node;
    use crate::parser::{BoxedParser, Parser};
    use crate::state::State;

    #[derive(Clone)]
    struct Stats {
        label: String,
        location: String,
        calls: u64,
        errors: u64,
        cumulative: Duration,
        self_time: Duration,
    }

    struct Frame {
        stats: Rc<RefCell<Stats>>,
        self_start: Instant,
    }

    thread_local! {
        static REGISTRY: RefCell<Vec<Rc<RefCell<Stats>>>> = RefCell::new(Vec::new());
        static ACTIVE: RefCell<Vec<Frame>> = RefCell::new(Vec::new());
        static SINK: RefCell<Option<Box<dyn Write>>> = RefCell::new(None);
        static PENDING: RefCell<Option<String>> = RefCell::new(None);
        static LOCATION_WIDTH: Cell<usize> = const { Cell::new(0) };
    }

    /// Parser wrapper recording call count, error count, cumulative and
    /// self wall time for one named grammar rule.
    pub struct Traced<'code> {
        stats: Rc<RefCell<Stats>>,
        inner: BoxedParser<'code>,
    }

    impl<'code> Parser<'code> for Traced<'code> {
        fn parse(&self, state: &mut State<'code>) -> Option<Node<'code>> {
            let start = Instant::now();
            ACTIVE.with(|active| {
                let mut active = active.borrow_mut();
                if let Some(parent) = active.last_mut() {
                    parent.stats.borrow_mut().self_time += start - parent.self_start;
                }
                active.push(Frame {
                    stats: Rc::clone(&self.stats),
                    self_start: start,
                });
            });
            log_entry(&self.stats.borrow().label, state);

            let result = self.inner.parse(state);

            log_exit(&self.stats.borrow().label, state, result.as_ref());
            let end = Instant::now();
            ACTIVE.with(|active| {
                let mut active = active.borrow_mut();
                if let Some(frame) = active.pop() {
                    let mut stats = self.stats.borrow_mut();
                    stats.self_time += end - frame.self_start;
                    stats.cumulative += end - start;
                    stats.calls += 1;
                    if result.is_none() {
                        stats.errors += 1;
                    }
                }
                if let Some(parent) = active.last_mut() {
                    parent.self_start = end;
                }
            });

            result
        }
    }

    /// Instrumenting hook: wraps the parser with stats recording under
    /// the given label, remembering the construction site.
    #[track_caller]
    pub fn named<'code>(label: &str, parser: impl Parser<'code> + 'code) -> Traced<'code> {
        let caller = std::panic::Location::caller();
        let location = format!("{}:{}", caller.file(), caller.line());
        LOCATION_WIDTH.with(|w| w.set(w.get().max(location.len())));

        let stats = Rc::new(RefCell::new(Stats {
            label: label.to_owned(),
            location,
            calls: 0,
            errors: 0,
            cumulative: Duration::ZERO,
            self_time: Duration::ZERO,
        }));
        REGISTRY.with(|registry| registry.borrow_mut().push(Rc::clone(&stats)));

        Traced {
            stats,
            inner: Box::new(parser),
        }
    }

    /// Streams an entry/exit line per named-parser invocation to the
    /// given sink until [`disable_trace`] is called.
    pub fn enable_trace(sink: impl Write + 'static) {
        SINK.with(|s| *s.borrow_mut() = Some(Box::new(sink)));
    }

    pub fn disable_trace() {
        SINK.with(|s| *s.borrow_mut() = None);
        PENDING.with(|p| *p.borrow_mut() = None);
    }

    fn trace_line(label_part: &str, state: &State<'_>, outcome: &str) -> String {
        let depth = ACTIVE.with(|active| active.borrow().len()).saturating_sub(1);
        let width = LOCATION_WIDTH.with(|w| w.get());
        let location = ACTIVE.with(|active| {
            active
                .borrow()
                .last()
                .map(|frame| frame.stats.borrow().location.clone())
                .unwrap_or_default()
        });
        format!(
            "{:>width$} | {:<15} | {}{}{}",
            location,
            state.preview(15),
            "  ".repeat(depth),
            label_part,
            outcome,
        )
    }

    fn log_entry(label: &str, state: &State<'_>) {
        SINK.with(|sink| {
            let mut sink = sink.borrow_mut();
            let Some(out) = sink.as_mut() else { return };
            PENDING.with(|pending| {
                if let Some(line) = pending.borrow_mut().take() {
                    let _ = writeln!(out, "{line}");
                }
                *pending.borrow_mut() = Some(trace_line(&format!("{label} {{"), state, ""));
            });
        });
    }

    fn log_exit(label: &str, state: &State<'_>, result: Option<&Node<'_>>) {
        SINK.with(|sink| {
            let mut sink = sink.borrow_mut();
            let Some(out) = sink.as_mut() else { return };
            let outcome = match result {
                Some(node) => {
                    let mut token = format!("{:?}", node.token);
                    if token.len() > 20 {
                        let mut cut = 20;
                        while !token.is_char_boundary(cut) {
                            cut -= 1;
                        }
                        token.truncate(cut);
                    }
                    format!(" found {token}")
                }
                None => match state.error() {
                    Some(error) => format!(" did not find {}", error.expected()),
                    None => " failed".to_owned(),
                },
            };
            PENDING.with(|pending| {
                // A leaf's entry and exit collapse into one line.
                let line = match pending.borrow_mut().take() {
                    Some(_) => trace_line(label, state, &outcome),
                    None => trace_line("}", state, &outcome),
                };
                let _ = writeln!(out, "{line}");
            });
        });
    }

    /// Prints per-parser statistics, sorted by descending cumulative
    /// time.
    pub fn dump_stats(out: &mut dyn Write) -> io::Result<()> {
        let mut rows: Vec<Stats> = REGISTRY.with(|registry| {
            registry
                .borrow()
                .iter()
                .map(|stats| stats.borrow().clone())
                .collect()
        });
        rows.sort_by(|a, b| b.cumulative.cmp(&a.cumulative));

        writeln!(out)?;
        writeln!(
            out,
            "| {:>20} | {:>15} | {:>15} | {:>10} | {:>10} | location",
            "parser", "total time", "self time", "calls", "errors",
        )?;
        writeln!(
            out,
            "| {:>20} | {:>15} | {:>15} | {:>10} | {:>10} | --------",
            "--------", "----------", "---------", "-----", "------",
        )?;
        for row in &rows {
            writeln!(
                out,
                "| {:>20} | {:>15} | {:>15} | {:>10} | {:>10} | {}",
                row.label,
                format!("{:?}", row.cumulative),
                format!("{:?}", row.self_time),
                row.calls,
                row.errors,
                row.location,
            )?;
        }
        Ok(())
    }
}

pub use imp::named;
#[cfg(feature = "trace")]
pub use imp::{Traced, disable_trace, dump_stats, enable_trace};
