//! Progress reports on the terminal
use super::policy::Periodic;
use super::progress::{FlushPolicy, ProgressLogger, ReportWriter, Stat};
use super::Id;
use crate::utils::fmt::{Compact, Rate};
use std::fmt;
use std::io::{self, Write};
use std::time::Duration;
use yansi::Paint;

/// Progress logger that reports to standard output.
pub type ConsoleLogger<P = Periodic> = ProgressLogger<P, Console<io::Stdout>>;

impl<P: FlushPolicy> ProgressLogger<P, Console<io::Stdout>> {
    /// Report to standard output whenever `policy` says so.
    pub fn to_console(policy: P) -> Self {
        Self::new(policy, Console::stdout())
    }
}

/// Writes reports as aligned, coloured text.
#[derive(Debug)]
pub struct Console<W> {
    out: W,
}

impl<W: Write> Console<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for Console<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ReportWriter for Console<W> {
    fn write_report(&mut self, entries: &[(&Id, &Stat)], elapsed: Duration) {
        let seconds = elapsed.as_secs_f64();
        // Write errors are ignored
        let _ = writeln!(self.out);
        for &(id, stat) in entries {
            let _ = writeln!(
                self.out,
                "{} {}",
                Paint::fixed(35, format!("{:<24}", id.to_string())),
                ShowStat { stat, seconds }
            );
        }
        let _ = self.out.flush();
    }
}

struct ShowStat<'a> {
    stat: &'a Stat,
    seconds: f64,
}

impl fmt::Display for ShowStat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.stat {
            Stat::Empty => Ok(()),
            Stat::Count { total, recent } => {
                write!(f, "{}  (+{})", total, Paint::fixed(253, recent))?;
                // Too noisy to be worth showing for a handful of increments
                if *recent > 5 && self.seconds > 0.0 {
                    write!(f, "  {:.2}", Paint::fixed(111, Rate::new(*recent, self.seconds)))?;
                }
                Ok(())
            }
            Stat::Mean(stats) => {
                if let Some(mean) = stats.mean() {
                    write!(f, "{:.3}", Compact(mean))?;
                }
                if stats.count() > 1 {
                    if let Some(stddev) = stats.stddev() {
                        let spread = format!("(σ {:.3})", Compact(stddev));
                        write!(f, " {}", Paint::fixed(8, spread))?;
                    }
                }
                Ok(())
            }
            Stat::Histogram(counts) => {
                let n: usize = counts.iter().sum();
                for (i, count) in counts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}%", count * 100 / n.max(1))?;
                }
                write!(f, "  {}", Paint::fixed(8, format!("(n {})", n)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::stats::OnlineMeanVariance;

    fn show(stat: &Stat) -> String {
        Paint::disable();
        ShowStat { stat, seconds: 1.0 }.to_string()
    }

    #[test]
    fn histogram_as_percentages() {
        assert_eq!(show(&Stat::Histogram(vec![1, 3])), "25% 75%  (n 4)");
    }

    #[test]
    fn mean_with_spread() {
        let stats: OnlineMeanVariance<f64> = [1.0, 3.0].into_iter().collect();
        assert_eq!(show(&Stat::Mean(stats)), "2.000 (σ 1.000)");
    }

    #[test]
    fn count_with_rate() {
        assert_eq!(show(&Stat::Count { total: 10, recent: 2 }), "10  (+2)");
        assert_eq!(
            show(&Stat::Count {
                total: 40,
                recent: 20
            }),
            "40  (+20)  20.00 /s"
        );
    }

    #[test]
    fn report_lines() {
        Paint::disable();
        let mut console = Console::new(Vec::new());
        let id = Id::new("agent").with("0").with("action");
        console.write_report(
            &[(&id, &Stat::Histogram(vec![0, 5]))],
            Duration::from_secs(1),
        );
        let text = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(text, format!("\n{:<24} 0% 100%  (n 5)\n", "agent/0/action"));
    }
}
