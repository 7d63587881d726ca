use std::num::IntErrorKind;

use hanoi::{
    snapshot, solve, ApiError, DiskCount, ErrorCode, HanoiError, Move, MoveSequence, MovedDisk,
    Navigation, PegState, StepCursor,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod page;
pub mod svg;

pub use page::render_page;
pub use svg::{render_svg, RenderConfig};

#[derive(Debug, Clone)]
pub struct ViewerContext {
    pub default_disks: DiskCount,
    pub render: RenderConfig,
}

impl Default for ViewerContext {
    fn default() -> Self {
        Self {
            default_disks: DiskCount::DEFAULT,
            render: RenderConfig::default(),
        }
    }
}

/// Query string of the page and the JSON state endpoint. Values stay raw
/// strings so a malformed number never fails extraction.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StepQuery {
    pub disks: Option<String>,
    pub index: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

impl StepQuery {
    /// Builds the query from raw key/value pairs. A repeated key keeps its
    /// first value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "disks" => &mut query.disks,
                "index" => &mut query.index,
                "prev" => &mut query.prev,
                "next" => &mut query.next,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DiskForm {
    pub disks: Option<String>,
}

impl DiskForm {
    /// First `disks` field wins, as for [`StepQuery::from_pairs`].
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let disks = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "disks").then_some(value));
        Self { disks }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiskInputError {
    #[error("Invalid input.")]
    NotANumber { raw: String },
    #[error("Too many disks. Choose {} or fewer.", DiskCount::MAX)]
    TooMany { requested: i64 },
    #[error("Choose at least {} disk.", DiskCount::MIN)]
    TooFew { requested: i64 },
}

impl From<HanoiError> for DiskInputError {
    fn from(value: HanoiError) -> Self {
        match value {
            HanoiError::InvalidDiskCount { requested } if requested < i64::from(DiskCount::MIN) => {
                Self::TooFew { requested }
            }
            HanoiError::InvalidDiskCount { requested } => Self::TooMany { requested },
        }
    }
}

impl From<DiskInputError> for ApiError {
    fn from(value: DiskInputError) -> Self {
        ApiError::new(ErrorCode::Validation, value.to_string())
    }
}

/// Parses a decimal integer, saturating values too large for `i64` so they
/// still clamp like any other out-of-range number. `None` for non-numbers.
pub fn parse_integer(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

pub fn parse_disks(raw: &str) -> Result<DiskCount, DiskInputError> {
    let requested = parse_integer(raw).ok_or_else(|| DiskInputError::NotANumber {
        raw: raw.to_string(),
    })?;
    Ok(DiskCount::new(requested)?)
}

/// Resolves the requested step from `index` plus an optional `prev`/`next`
/// button. `prev` wins when both are present.
pub fn resolve_step(query: &StepQuery, total_moves: usize) -> StepCursor {
    let index = query
        .index
        .as_deref()
        .and_then(parse_integer)
        .unwrap_or(0);
    let navigation = if query.prev.is_some() {
        Navigation::Previous
    } else if query.next.is_some() {
        Navigation::Next
    } else {
        return StepCursor::start(total_moves).navigate(Navigation::Jump(index));
    };
    StepCursor::new(index, total_moves).navigate(navigation)
}

#[derive(Debug, Clone, Serialize)]
pub struct PuzzleView {
    pub disks: DiskCount,
    pub step: usize,
    pub total_moves: usize,
    pub pegs: PegState,
    pub last_move: Option<MovedDisk>,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PuzzleView {
    pub fn build(disks: DiskCount, step: i64) -> Self {
        let moves = solve(disks);
        let cursor = StepCursor::new(step, moves.len());
        Self::at(disks, &moves, cursor)
    }

    fn at(disks: DiskCount, moves: &MoveSequence, cursor: StepCursor) -> Self {
        let snap = snapshot(disks, moves, cursor.step() as i64);
        debug!(disks = disks.get(), step = snap.step, "reconstructed puzzle state");
        Self {
            disks,
            step: snap.step,
            total_moves: cursor.total_moves(),
            solved: snap.state.all_on(moves.target()),
            pegs: snap.state,
            last_move: snap.last_move,
            can_go_back: !cursor.at_start(),
            can_go_forward: !cursor.at_end(),
            message: None,
        }
    }

    fn for_query(disks: DiskCount, query: &StepQuery) -> Self {
        let moves = solve(disks);
        let cursor = resolve_step(query, moves.len());
        Self::at(disks, &moves, cursor)
    }

    fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MovesResponse {
    pub disks: DiskCount,
    pub total_moves: usize,
    pub moves: Vec<Move>,
}

fn strict_disks(ctx: &ViewerContext, raw: Option<&str>) -> Result<DiskCount, ApiError> {
    match raw {
        None => Ok(ctx.default_disks),
        Some(raw) => parse_disks(raw).map_err(ApiError::from),
    }
}

pub fn list_moves(ctx: &ViewerContext, query: &StepQuery) -> Result<MovesResponse, ApiError> {
    let disks = strict_disks(ctx, query.disks.as_deref())?;
    let moves = solve(disks);
    Ok(MovesResponse {
        disks,
        total_moves: moves.len(),
        moves: moves.moves().to_vec(),
    })
}

pub fn puzzle_state(ctx: &ViewerContext, query: &StepQuery) -> Result<PuzzleView, ApiError> {
    let disks = strict_disks(ctx, query.disks.as_deref())?;
    Ok(PuzzleView::for_query(disks, query))
}

/// View for `GET /`. Missing or malformed counts fall back to the default
/// silently; out-of-range counts fall back with a message.
pub fn page_view(ctx: &ViewerContext, query: &StepQuery) -> PuzzleView {
    let (disks, message) = match query.disks.as_deref().map(parse_disks) {
        None => (ctx.default_disks, None),
        Some(Ok(disks)) => (disks, None),
        Some(Err(DiskInputError::NotANumber { raw })) => {
            debug!(%raw, "ignoring malformed disk count in query");
            (ctx.default_disks, None)
        }
        Some(Err(err)) => fallback(ctx, err),
    };
    PuzzleView::for_query(disks, query).with_message(message)
}

/// View for `POST /`: always starts at step zero.
pub fn form_view(ctx: &ViewerContext, form: &DiskForm) -> PuzzleView {
    let parsed = match form.disks.as_deref() {
        Some(raw) => parse_disks(raw),
        None => Err(DiskInputError::NotANumber { raw: String::new() }),
    };
    let (disks, message) = match parsed {
        Ok(disks) => (disks, None),
        Err(err) => fallback(ctx, err),
    };
    PuzzleView::build(disks, 0).with_message(message)
}

fn fallback(ctx: &ViewerContext, err: DiskInputError) -> (DiskCount, Option<String>) {
    warn!(error = ?err, default = ctx.default_disks.get(), "rejected disk count");
    (ctx.default_disks, Some(err.to_string()))
}

pub fn render_view(ctx: &ViewerContext, view: &PuzzleView) -> String {
    let frame = render_svg(&view.pegs, view.disks, &ctx.render);
    render_page(view, &frame, &ctx.render)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
