//! Optional narrative commentary.
//!
//! A [`Commentary`] service receives a plain-text [`summary`] of a snapshot
//! and its evaluation and returns free text. The model never depends on it:
//! [`annotate`] only borrows the evaluation, and a failing service yields
//! `None` plus a log line.

use core::fmt;

use thiserror::Error;
use tracing::warn;

use crate::model::Evaluation;
use crate::prices::PriceOutcome;
use crate::snapshot::Snapshot;

#[derive(Debug, Error)]
pub enum CommentaryError {
    /// No service is configured or reachable.
    #[error("commentary unavailable: {0}")]
    Unavailable(String),

    #[error("commentary failed: {0}")]
    Failed(String),
}

/// A source of narrative text about an evaluation.
pub trait Commentary {
    fn comment(&self, summary: &str) -> Result<String, CommentaryError>;
}

/// The absent service.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCommentary;

impl Commentary for NoCommentary {
    fn comment(&self, _summary: &str) -> Result<String, CommentaryError> {
        Err(CommentaryError::Unavailable(
            "no commentary service configured".to_owned(),
        ))
    }
}

/// Plain-text description of a snapshot and its evaluation.
pub fn summary(snapshot: &Snapshot, evaluation: &Evaluation) -> String {
    Summary {
        snapshot,
        evaluation,
    }
    .to_string()
}

struct Summary<'a> {
    snapshot: &'a Snapshot,
    evaluation: &'a Evaluation,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            snapshot,
            evaluation,
        } = self;
        writeln!(
            f,
            "{} commodities, profit rate {:.2}%, wage {:.4}",
            snapshot.len(),
            snapshot.profit_rate * 100.0,
            snapshot.wage
        )?;
        writeln!(
            f,
            "maximum profit rate {:.2}%",
            evaluation.max_profit_rate * 100.0
        )?;

        match &evaluation.prices {
            PriceOutcome::Singular => writeln!(f, "price system singular: no prices")?,
            outcome => {
                let status = if outcome.is_valid() { "valid" } else { "invalid" };
                writeln!(f, "prices ({status}):")?;
                for (c, p) in snapshot.commodities.iter().zip(outcome.prices()) {
                    writeln!(f, "  {}: {p:.6}", c.name)?;
                }
            }
        }

        if let Some(d) = &evaluation.distribution {
            writeln!(
                f,
                "wages {:.2} ({:.1}%), profits {:.2} ({:.1}%), net product {:.2}",
                d.total_wages, d.wage_share, d.total_profits, d.profit_share, d.net_product
            )?;
        }
        Ok(())
    }
}

/// Ask `service` for commentary on an evaluation.
///
/// Failures are logged and turned into `None`.
pub fn annotate<C>(service: &C, snapshot: &Snapshot, evaluation: &Evaluation) -> Option<String>
where
    C: Commentary + ?Sized,
{
    match service.comment(&summary(snapshot, evaluation)) {
        Ok(text) => Some(text),
        Err(error) => {
            warn!(%error, "commentary failed; continuing without it");
            None
        }
    }
}
