//! Cut sequences edited one operation at a time

use super::{Editable, SpacingConfig, SpacingKind, SpacingStrategy};
use crate::adjoining::validate_joint;
use crate::bit::RouterBit;
use crate::board::Board;
use crate::cut::Cut;
use crate::params::SpacingParams;
use crate::undo::UndoStack;
use routerjig_core::{Intervals, Result};
use tracing::debug;

/// Snapshot of the editor: cuts, which of them are active, and the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    cuts: Vec<Cut>,
    active: Vec<bool>,
    cursor: usize,
}

impl EditState {
    /// Fresh state with only the first cut active
    fn seeded(cuts: &[Cut]) -> Self {
        let cuts: Vec<Cut> = cuts.iter().map(|c| Cut::new(c.left, c.right)).collect();
        let mut active = vec![false; cuts.len()];
        if let Some(first) = active.first_mut() {
            *first = true;
        }
        Self {
            cuts,
            active,
            cursor: 0,
        }
    }

    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    pub fn active(&self) -> &[bool] {
        &self.active
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn active_indices(&self) -> Vec<usize> {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(i, &a)| a.then_some(i))
            .collect()
    }

    fn with_cuts(&self, cuts: Vec<Cut>) -> Self {
        Self {
            cuts,
            active: self.active.clone(),
            cursor: self.cursor,
        }
    }
}

/// Editor over a seed sequence
///
/// Operations never mutate a snapshot in place: each successful one pushes
/// the current [`EditState`] on the undo stack and replaces it.
#[derive(Debug, Clone)]
pub struct EditSpacing {
    bit: RouterBit,
    board: Board,
    config: SpacingConfig,
    seed: Vec<Cut>,
    state: EditState,
    undo: UndoStack<EditState>,
}

impl EditSpacing {
    /// Start editing from `seed`, usually another strategy's cuts
    pub fn new(
        bit: &RouterBit,
        board: &Board,
        config: &SpacingConfig,
        seed: &[Cut],
    ) -> Result<Self> {
        validate_joint(seed, bit, board)?;
        Ok(Self {
            bit: bit.clone(),
            board: board.clone(),
            config: *config,
            seed: EditState::seeded(seed).cuts,
            state: EditState::seeded(seed),
            undo: UndoStack::with_depth(config.undo_depth),
        })
    }

    /// Replace the seed, discarding all edits and the undo history
    pub fn reseed(&mut self, seed: &[Cut]) -> Result<()> {
        validate_joint(seed, &self.bit, &self.board)?;
        self.state = EditState::seeded(seed);
        self.seed = self.state.cuts.clone();
        self.undo.clear();
        debug!(count = seed.len(), "edit spacing reseeded");
        Ok(())
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn seed(&self) -> &[Cut] {
        &self.seed
    }

    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    fn commit(&mut self, op: &str, next: EditState) {
        let previous = std::mem::replace(&mut self.state, next);
        self.undo.push(previous);
        debug!(op, cursor = self.state.cursor, "edit committed");
    }

    /// Length of one interval, for messages
    fn one_interval(&self) -> String {
        self.config.units.format_with_label(1)
    }

    /// Apply `adjust` to every active cut and commit if the joint is valid
    fn edit_active(
        &mut self,
        action: &str,
        done: String,
        adjust: impl Fn(&Cut, Intervals) -> std::result::Result<Cut, &'static str>,
    ) -> String {
        let active = self.state.active_indices();
        if active.is_empty() {
            return format!("Unable to {}: no cuts are active", action);
        }
        let board_width = self.board.width();
        let mut cuts = self.state.cuts.clone();
        for &i in &active {
            match adjust(&cuts[i], board_width) {
                Ok(cut) => cuts[i] = cut,
                Err(reason) => return format!("Unable to {}: {}", action, reason),
            }
        }
        if let Err(e) = validate_joint(&cuts, &self.bit, &self.board) {
            return format!("Unable to {}: {}", action, e);
        }
        let next = self.state.with_cuts(cuts);
        self.commit(action, next);
        done
    }
}

impl SpacingStrategy for EditSpacing {
    fn kind(&self) -> SpacingKind {
        SpacingKind::Edit
    }

    fn cuts(&self) -> &[Cut] {
        &self.state.cuts
    }

    fn labels(&self) -> Vec<String> {
        let active = self.state.active_indices().len();
        vec![
            format!("Cuts: {}", self.state.cuts.len()),
            format!("Active: {}", active),
            format!("Cursor: {}", self.state.cursor),
        ]
    }

    fn params(&self) -> SpacingParams {
        SpacingParams::Edit {
            cuts: self.state.cuts.iter().map(Cut::bounds).collect(),
        }
    }

    /// Reset to the seed
    fn set_cuts(&mut self) -> Result<()> {
        validate_joint(&self.seed, &self.bit, &self.board)?;
        self.state = EditState::seeded(&self.seed);
        self.undo.clear();
        Ok(())
    }
}

impl Editable for EditSpacing {
    fn cut_move_left(&mut self) -> String {
        let done = format!("Moved active cuts left {}", self.one_interval());
        self.edit_active("move left", done, |c, _| {
            if c.left == 0 {
                return Err("a cut is on the left edge");
            }
            Ok(c.shifted(-1))
        })
    }

    fn cut_move_right(&mut self) -> String {
        let done = format!("Moved active cuts right {}", self.one_interval());
        self.edit_active("move right", done, |c, width| {
            if c.right == width {
                return Err("a cut is on the right edge");
            }
            Ok(c.shifted(1))
        })
    }

    fn cut_widen_left(&mut self) -> String {
        let done = format!("Widened active cuts left {}", self.one_interval());
        self.edit_active("widen left", done, |c, _| {
            if c.left == 0 {
                return Err("a cut is on the left edge");
            }
            Ok(Cut::new(c.left - 1, c.right))
        })
    }

    fn cut_widen_right(&mut self) -> String {
        let done = format!("Widened active cuts right {}", self.one_interval());
        self.edit_active("widen right", done, |c, width| {
            if c.right == width {
                return Err("a cut is on the right edge");
            }
            Ok(Cut::new(c.left, c.right + 1))
        })
    }

    fn cut_trim_left(&mut self) -> String {
        let done = format!("Trimmed active cuts left {}", self.one_interval());
        self.edit_active("trim left", done, |c, _| Ok(Cut::new(c.left + 1, c.right)))
    }

    fn cut_trim_right(&mut self) -> String {
        let done = format!("Trimmed active cuts right {}", self.one_interval());
        self.edit_active("trim right", done, |c, _| Ok(Cut::new(c.left, c.right - 1)))
    }

    fn cut_toggle(&mut self) -> String {
        let cursor = self.state.cursor;
        let mut next = self.state.clone();
        let Some(flag) = next.active.get_mut(cursor) else {
            return "No cut under the cursor".to_string();
        };
        *flag = !*flag;
        let msg = if *flag {
            format!("Cut {} active", cursor)
        } else {
            format!("Cut {} not active", cursor)
        };
        self.commit("toggle", next);
        msg
    }

    fn cut_all_active(&mut self) -> String {
        let mut next = self.state.clone();
        next.active.iter_mut().for_each(|a| *a = true);
        self.commit("all active", next);
        "All cuts active".to_string()
    }

    fn cut_all_not_active(&mut self) -> String {
        let mut next = self.state.clone();
        next.active.iter_mut().for_each(|a| *a = false);
        self.commit("all not active", next);
        "No cuts active".to_string()
    }

    fn cut_add(&mut self) -> String {
        let cuts = self.state.cuts.clone();
        let (Some(first), Some(last)) = (cuts.first(), cuts.last()) else {
            return "Unable to add a cut: no cuts to place it between".to_string();
        };
        let board_width = self.board.width();

        // (insert index, gap left, gap right), left to right
        let mut gaps = Vec::with_capacity(cuts.len() + 1);
        if first.left > 0 {
            gaps.push((0, 0, first.left));
        }
        for (i, pair) in cuts.windows(2).enumerate() {
            gaps.push((i + 1, pair[0].right, pair[1].left));
        }
        if last.right < board_width {
            gaps.push((cuts.len(), last.right, board_width));
        }

        let half = self.bit.halfwidth();
        for (index, gap_left, gap_right) in gaps {
            let mid = (gap_left + gap_right) / 2;
            let mut candidate = cuts.clone();
            candidate.insert(index, Cut::new(mid - half, mid + half));
            if validate_joint(&candidate, &self.bit, &self.board).is_err() {
                continue;
            }
            let mut active = vec![false; candidate.len()];
            active[index] = true;
            let next = EditState {
                cuts: candidate,
                active,
                cursor: index,
            };
            self.commit("add", next);
            return format!("Added cut {}", index);
        }
        "Unable to add a cut: no gap is wide enough".to_string()
    }

    fn cut_delete_active(&mut self) -> String {
        let active = self.state.active_indices();
        if active.is_empty() {
            return "Unable to delete: no cuts are active".to_string();
        }
        if active.len() == self.state.cuts.len() {
            return "Unable to delete all cuts".to_string();
        }
        let cuts: Vec<Cut> = self
            .state
            .cuts
            .iter()
            .zip(&self.state.active)
            .filter(|(_, a)| !**a)
            .map(|(c, _)| c.clone())
            .collect();
        if let Err(e) = validate_joint(&cuts, &self.bit, &self.board) {
            return format!("Unable to delete: {}", e);
        }
        let cursor = self.state.cursor.min(cuts.len() - 1);
        let mut flags = vec![false; cuts.len()];
        flags[cursor] = true;
        let next = EditState {
            cuts,
            active: flags,
            cursor,
        };
        self.commit("delete", next);
        format!("Deleted {} active cuts", active.len())
    }

    fn cut_increment_cursor(&mut self, delta: i32) -> String {
        let count = self.state.cuts.len();
        if count == 0 {
            return "No cuts".to_string();
        }
        let mut next = self.state.clone();
        // usize -> i64 is lossless for any cut count
        next.cursor = (next.cursor as i64 + i64::from(delta)).rem_euclid(count as i64) as usize;
        let msg = format!("Cursor at cut {}", next.cursor);
        self.commit("cursor", next);
        msg
    }

    fn undo(&mut self) -> String {
        match self.undo.pop() {
            Some(previous) => {
                self.state = previous;
                debug!(remaining = self.undo.len(), "edit undone");
                "Undo".to_string()
            }
            None => "Nothing to undo".to_string(),
        }
    }

    fn changes_made(&self) -> bool {
        self.state.cuts.len() != self.seed.len()
            || self
                .state
                .cuts
                .iter()
                .zip(&self.seed)
                .any(|(c, s)| c.bounds() != s.bounds())
    }
}
