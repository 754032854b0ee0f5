//! # Engine Module
//!
//! The calculator state machine.
//!
//! ## State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CalculatorEngine State                               │
//! │                                                                         │
//! │   current     "0"   operand being typed ("" = awaiting next operand)   │
//! │   previous    ""    left-hand operand   ("" = nothing pending)         │
//! │   operator    None  pending operator                                   │
//! │                                                                         │
//! │  Keypad            Operation                   Fields touched           │
//! │  ──────            ─────────                   ──────────────           │
//! │  0-9 .   ────────► append_digit_or_point() ──► current                  │
//! │  «       ────────► backspace() ──────────────► current                  │
//! │  +/-     ────────► toggle_sign() ────────────► current                  │
//! │  + - ... ────────► select_operator() ────────► all three                │
//! │  =       ────────► evaluate() ───────────────► all three                │
//! │  C       ────────► clear() ──────────────────► all three                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Deferred Evaluation
//! ```text
//!  2   +   3   +            (chained: the second "+" folds 2 + 3 first)
//!  │   │   │   │
//!  ▼   ▼   ▼   ▼
//! "2"  ""  "3" ""           current
//! ""  "2"  "2" "5"          previous
//!  -   +   +   +            operator
//! ```
//!
//! ## Usage
//! ```rust
//! use abaco_core::{CalculatorEngine, Operator};
//!
//! let mut engine = CalculatorEngine::new();
//! engine.append_digit_or_point('2').unwrap();
//! engine.select_operator(Operator::Add).unwrap();
//! engine.append_digit_or_point('3').unwrap();
//! engine.evaluate().unwrap();
//!
//! assert_eq!(engine.primary_display(), "5");
//! ```

use tracing::{debug, trace, warn};

use crate::display::DisplaySnapshot;
use crate::error::{CoreError, CoreResult};
use crate::format::{operand_from_f64, parse_operand, NumberFormatter};
use crate::types::{FontScale, Key, Operator};
use crate::INITIAL_OPERAND;

// =============================================================================
// Event Sink
// =============================================================================

/// Callback seam between the engine and whatever presents its events.
///
/// The engine never shows anything itself. A renderer implements this to pop
/// an alert on division by zero, play a sound on a result, and so on.
/// Both methods default to doing nothing.
pub trait EventSink {
    /// Called with a user-facing error, before the engine resets itself.
    fn on_error(&mut self, _error: &CoreError) {}

    /// Called with every successfully computed result.
    fn on_result(&mut self, _value: f64) {}
}

/// Sink that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl EventSink for SilentSink {}

// =============================================================================
// Calculator Engine
// =============================================================================

/// One calculator session.
///
/// ## Invariants
/// - `current` holds at most one `.`
/// - `current` has no redundant leading zero besides `"0"` and `"0."`
/// - `previous` and `operator` are set and cleared together
#[derive(Debug, Clone)]
pub struct CalculatorEngine<S: EventSink = SilentSink> {
    current: String,
    previous: String,
    operator: Option<Operator>,
    sink: S,
}

impl CalculatorEngine<SilentSink> {
    /// Creates a cleared engine that reports nothing.
    pub fn new() -> Self {
        Self::with_sink(SilentSink)
    }
}

impl Default for CalculatorEngine<SilentSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> CalculatorEngine<S> {
    /// Creates a cleared engine that reports events to `sink`.
    pub fn with_sink(sink: S) -> Self {
        CalculatorEngine {
            current: INITIAL_OPERAND.to_string(),
            previous: String::new(),
            operator: None,
            sink,
        }
    }

    // -------------------------------------------------------------------------
    // Entry
    // -------------------------------------------------------------------------

    /// Appends a digit or the decimal point to the current operand.
    ///
    /// ## Rules (first match wins)
    /// ```text
    /// '0'  on "0"              → no-op
    /// '.'  on "" or "0"        → "0."
    /// '.'  when "." present    → no-op
    /// digit on "0"             → replaces the zero
    /// otherwise                → appended
    /// ```
    ///
    /// `""` (right after an operator) only matches the point rule: a digit
    /// typed there is appended to the empty string rather than replacing it.
    ///
    /// ## Errors
    /// [`CoreError::InvalidToken`] for anything but `0-9` and `.`.
    pub fn append_digit_or_point(&mut self, token: char) -> CoreResult<()> {
        if token != '.' && !token.is_ascii_digit() {
            return Err(CoreError::InvalidToken(token));
        }

        if token == '0' && self.current == INITIAL_OPERAND {
            return Ok(());
        }

        if token == '.' {
            if self.current.is_empty() || self.current == INITIAL_OPERAND {
                self.current = "0.".to_string();
                return Ok(());
            }
            if self.current.contains('.') {
                return Ok(());
            }
        }

        if self.current == INITIAL_OPERAND {
            self.current = token.to_string();
        } else {
            self.current.push(token);
        }

        Ok(())
    }

    /// Removes the last character of the current operand.
    ///
    /// An operand that becomes empty falls back to `"0"`.
    pub fn backspace(&mut self) {
        self.current.pop();
        if self.current.is_empty() {
            self.current = INITIAL_OPERAND.to_string();
        }
    }

    /// Flips the sign of the current operand.
    ///
    /// `"0"` is left alone. Anything else is parsed, negated and
    /// re-stringified, so `"0."` becomes `"0"` and `"12."` becomes `"-12"`.
    ///
    /// ## Errors
    /// [`CoreError::InvalidOperand`] when the operand is not a number
    /// (`""` after an operator, `"-"` after backspacing `"-5"`).
    /// The state is left untouched.
    pub fn toggle_sign(&mut self) -> CoreResult<()> {
        if self.current == INITIAL_OPERAND {
            return Ok(());
        }

        let value = parse_operand(&self.current)?;
        self.current = operand_from_f64(-value);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Operators
    // -------------------------------------------------------------------------

    /// Selects the pending operator.
    ///
    /// ## Behavior
    /// - Nothing typed since the last operator: no-op
    /// - An operator already pending: it is evaluated first (chaining)
    /// - The current operand moves to `previous`; `current` becomes `""`
    ///
    /// A division by zero in the chained evaluation has already been
    /// reported to the sink and cleared the engine, so `op` is then selected
    /// on top of `"0"`.
    ///
    /// ## Errors
    /// [`CoreError::InvalidOperand`] when the current operand is not a
    /// number (`"-"` after backspacing `"-5"`). Nothing changes, so the
    /// operand can still be corrected.
    pub fn select_operator(&mut self, op: Operator) -> CoreResult<()> {
        if self.current.is_empty() {
            trace!(operator = %op, "operator ignored, no operand typed");
            return Ok(());
        }

        parse_operand(&self.current)?;

        if !self.previous.is_empty() {
            match self.evaluate() {
                Ok(()) | Err(CoreError::DivisionByZero) => {}
                Err(err) => return Err(err),
            }
        }

        debug!(operator = %op, operand = %self.current, "operator selected");
        self.operator = Some(op);
        self.previous = std::mem::take(&mut self.current);
        Ok(())
    }

    /// Applies the pending operator.
    ///
    /// ## Behavior
    /// ```text
    /// no operator pending                   → no-op
    /// binary operator, current ""           → no-op
    /// "/" with current == 0                 → DivisionByZero, engine cleared
    /// otherwise                             → current = result,
    ///                                         previous = "", operator = None
    /// ```
    ///
    /// Unary operators (`√`) never read the current operand, so they can be
    /// evaluated right after being selected.
    ///
    /// ## Errors
    /// - [`CoreError::DivisionByZero`], reported to the sink first
    /// - [`CoreError::InvalidOperand`] when an operand does not parse; the
    ///   state is left untouched
    pub fn evaluate(&mut self) -> CoreResult<()> {
        let Some(op) = self.operator else {
            return Ok(());
        };

        if !op.is_unary() && self.current.is_empty() {
            trace!(operator = %op, "evaluation ignored, no right-hand operand");
            return Ok(());
        }

        let prev = parse_operand(&self.previous)?;
        let current = if op.is_unary() {
            None
        } else {
            Some(parse_operand(&self.current)?)
        };

        if op == Operator::Divide && current == Some(0.0) {
            let err = CoreError::DivisionByZero;
            warn!(dividend = %self.previous, "division by zero, resetting");
            self.sink.on_error(&err);
            self.clear();
            return Err(err);
        }

        let result = op.apply(prev, current.unwrap_or_default());
        debug!(
            previous = %self.previous,
            operator = %op,
            current = %self.current,
            result,
            "evaluated"
        );

        self.current = operand_from_f64(result);
        self.previous.clear();
        self.operator = None;
        self.sink.on_result(result);
        Ok(())
    }

    /// Resets every field to its initial value.
    pub fn clear(&mut self) {
        self.current = INITIAL_OPERAND.to_string();
        self.previous.clear();
        self.operator = None;
    }

    /// Dispatches one classified key press to its operation.
    pub fn press(&mut self, key: Key) -> CoreResult<()> {
        match key {
            Key::Digit(d) => self.append_digit_or_point(d),
            Key::Point => self.append_digit_or_point('.'),
            Key::Operator(op) => self.select_operator(op),
            Key::Equals => self.evaluate(),
            Key::Clear => {
                self.clear();
                Ok(())
            }
            Key::Backspace => {
                self.backspace();
                Ok(())
            }
            Key::ToggleSign => self.toggle_sign(),
        }
    }

    // -------------------------------------------------------------------------
    // Read-only projection
    // -------------------------------------------------------------------------

    /// The operand being typed, unformatted.
    pub fn current_operand(&self) -> &str {
        &self.current
    }

    /// The left-hand operand, `""` when nothing is pending.
    pub fn previous_operand(&self) -> &str {
        &self.previous
    }

    /// The pending operator, if any.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Whether the engine is in its initial state.
    pub fn is_cleared(&self) -> bool {
        self.current == INITIAL_OPERAND && self.previous.is_empty() && self.operator.is_none()
    }

    /// Main display line: the formatted current operand.
    pub fn primary_display(&self) -> String {
        NumberFormatter::format(&self.current)
    }

    /// Secondary display line: `previous operator current`.
    ///
    /// The previous operand is shown raw, the current one formatted.
    pub fn secondary_display(&self) -> String {
        format!(
            "{} {} {}",
            self.previous,
            self.operator.map_or("", |op| op.symbol()),
            NumberFormatter::format(&self.current)
        )
    }

    /// Font scale hint for the primary display.
    pub fn font_scale(&self) -> FontScale {
        FontScale::for_operand(&self.current)
    }

    /// Everything a renderer needs after an operation.
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            primary: self.primary_display(),
            secondary: self.secondary_display(),
            font_scale: self.font_scale(),
        }
    }

    /// The event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The event sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingSink {
        errors: Vec<CoreError>,
        results: Vec<f64>,
    }

    impl EventSink for RecordingSink {
        fn on_error(&mut self, error: &CoreError) {
            self.errors.push(error.clone());
        }

        fn on_result(&mut self, value: f64) {
            self.results.push(value);
        }
    }

    /// Presses every whitespace-separated token in order.
    fn run<S: EventSink>(engine: &mut CalculatorEngine<S>, tokens: &str) -> CoreResult<()> {
        for token in tokens.split_whitespace() {
            engine.press(token.parse()?)?;
        }
        Ok(())
    }

    fn typed(tokens: &str) -> CalculatorEngine {
        let mut engine = CalculatorEngine::new();
        run(&mut engine, tokens).unwrap();
        engine
    }

    fn assert_cleared<S: EventSink>(engine: &CalculatorEngine<S>) {
        assert_eq!(engine.current_operand(), "0");
        assert_eq!(engine.previous_operand(), "");
        assert_eq!(engine.pending_operator(), None);
        assert!(engine.is_cleared());
    }

    // -------------------------------------------------------------------------
    // Entry
    // -------------------------------------------------------------------------

    #[test]
    fn test_new_engine_is_cleared() {
        let engine = CalculatorEngine::new();
        assert_cleared(&engine);
        assert_eq!(engine.primary_display(), "0");
        assert_eq!(engine.secondary_display(), "  0");
    }

    #[test]
    fn test_leading_zero_suppressed() {
        let mut engine = CalculatorEngine::new();
        for _ in 0..5 {
            engine.append_digit_or_point('0').unwrap();
            assert_eq!(engine.current_operand(), "0");
        }
    }

    #[test]
    fn test_digit_replaces_initial_zero() {
        assert_eq!(typed("7").current_operand(), "7");
        assert_eq!(typed("7 0 0").current_operand(), "700");
    }

    #[test]
    fn test_point_on_zero_becomes_zero_point() {
        assert_eq!(typed(".").current_operand(), "0.");
        assert_eq!(typed(". 5").current_operand(), "0.5");
        assert_eq!(typed("0 . 0 5").current_operand(), "0.05");
    }

    #[test]
    fn test_second_point_rejected() {
        assert_eq!(typed("1 . 2 . 3 .").current_operand(), "1.23");
    }

    #[test]
    fn test_never_more_than_one_point() {
        let alphabet = ['0', '1', '5', '9', '.'];
        // Every sequence of length 5 over the alphabet
        for n in 0..alphabet.len().pow(5) {
            let mut engine = CalculatorEngine::new();
            let mut k = n;
            for _ in 0..5 {
                engine.append_digit_or_point(alphabet[k % alphabet.len()]).unwrap();
                k /= alphabet.len();
            }
            let current = engine.current_operand();
            assert!(current.matches('.').count() <= 1, "{current}");
            assert!(!current.starts_with("00"), "{current}");
        }
    }

    #[test]
    fn test_invalid_token_rejected() {
        let mut engine = CalculatorEngine::new();
        assert_eq!(
            engine.append_digit_or_point('a'),
            Err(CoreError::InvalidToken('a'))
        );
        assert_cleared(&engine);
    }

    #[test]
    fn test_empty_operand_appends_instead_of_replacing() {
        // After an operator the current operand is "", not "0". A point still
        // becomes "0." but a digit is appended to the empty string.
        let mut engine = typed("4 +");
        assert_eq!(engine.current_operand(), "");
        engine.append_digit_or_point('7').unwrap();
        assert_eq!(engine.current_operand(), "7");

        let mut engine = typed("4 +");
        engine.append_digit_or_point('0').unwrap();
        assert_eq!(engine.current_operand(), "0");
        engine.append_digit_or_point('0').unwrap();
        assert_eq!(engine.current_operand(), "0");

        let mut engine = typed("4 +");
        engine.append_digit_or_point('.').unwrap();
        assert_eq!(engine.current_operand(), "0.");
    }

    // -------------------------------------------------------------------------
    // Backspace / sign
    // -------------------------------------------------------------------------

    #[test]
    fn test_backspace() {
        let mut engine = typed("1 2 3");
        engine.backspace();
        assert_eq!(engine.current_operand(), "12");
        engine.backspace();
        engine.backspace();
        assert_eq!(engine.current_operand(), "0");
        engine.backspace();
        assert_eq!(engine.current_operand(), "0");
    }

    #[test]
    fn test_backspace_on_awaiting_operand() {
        let mut engine = typed("4 +");
        engine.backspace();
        assert_eq!(engine.current_operand(), "0");
        assert_eq!(engine.previous_operand(), "4");
    }

    #[test]
    fn test_toggle_sign() {
        let mut engine = CalculatorEngine::new();
        engine.toggle_sign().unwrap();
        assert_eq!(engine.current_operand(), "0");

        let mut engine = typed("5");
        engine.toggle_sign().unwrap();
        assert_eq!(engine.current_operand(), "-5");
        engine.toggle_sign().unwrap();
        assert_eq!(engine.current_operand(), "5");
    }

    #[test]
    fn test_toggle_sign_restringifies() {
        assert_eq!(typed("1 2 . +/-").current_operand(), "-12");
        assert_eq!(typed("0 . +/-").current_operand(), "0");
        assert_eq!(typed("1 . 5 +/-").current_operand(), "-1.5");
    }

    #[test]
    fn test_toggle_sign_on_non_numeric_operand() {
        let mut engine = typed("5 +/- «");
        assert_eq!(engine.current_operand(), "-");
        assert_eq!(
            engine.toggle_sign(),
            Err(CoreError::InvalidOperand {
                operand: "-".to_string()
            })
        );
        assert_eq!(engine.current_operand(), "-");
    }

    #[test]
    fn test_toggle_sign_while_awaiting_operand() {
        let mut engine = typed("2 +");
        assert_eq!(engine.current_operand(), "");
        assert_eq!(
            engine.toggle_sign(),
            Err(CoreError::InvalidOperand {
                operand: String::new()
            })
        );
        assert_eq!(engine.current_operand(), "");
        assert_eq!(engine.previous_operand(), "2");
        assert_eq!(engine.pending_operator(), Some(Operator::Add));

        run(&mut engine, "3 =").unwrap();
        assert_eq!(engine.current_operand(), "5");
    }

    // -------------------------------------------------------------------------
    // Operators / evaluation
    // -------------------------------------------------------------------------

    #[test]
    fn test_basic_operations() {
        assert_eq!(typed("2 + 3 =").current_operand(), "5");
        assert_eq!(typed("2 - 3 =").current_operand(), "-1");
        assert_eq!(typed("4 * 2 . 5 =").current_operand(), "10");
        assert_eq!(typed("1 0 / 4 =").current_operand(), "2.5");
        assert_eq!(typed("2 ^ 1 0 =").current_operand(), "1024");
    }

    #[test]
    fn test_evaluate_resets_pending_state() {
        let engine = typed("2 + 3 =");
        assert_eq!(engine.previous_operand(), "");
        assert_eq!(engine.pending_operator(), None);
    }

    #[test]
    fn test_percent_adds_percentage() {
        assert_eq!(typed("2 0 0 % 1 0 =").current_operand(), "220");
        assert_eq!(typed("5 0 % 5 0 =").current_operand(), "75");
    }

    #[test]
    fn test_square_root_ignores_current_operand() {
        assert_eq!(typed("9 √ =").current_operand(), "3");
        assert_eq!(typed("9 √ 1 2 3 =").current_operand(), "3");
        assert_eq!(typed("2 √ =").current_operand(), "1.4142135623730951");
    }

    #[test]
    fn test_square_root_of_negative_is_nan() {
        let engine = typed("4 +/- √ =");
        assert_eq!(engine.current_operand(), "NaN");
        assert_eq!(engine.primary_display(), "NaN");
    }

    #[test]
    fn test_evaluate_without_operator_is_noop() {
        let mut engine = typed("1 2");
        engine.evaluate().unwrap();
        assert_eq!(engine.current_operand(), "12");

        let mut engine = CalculatorEngine::new();
        engine.evaluate().unwrap();
        assert_cleared(&engine);
    }

    #[test]
    fn test_evaluate_without_right_operand_is_noop() {
        let mut engine = typed("2 +");
        engine.evaluate().unwrap();
        assert_eq!(engine.current_operand(), "");
        assert_eq!(engine.previous_operand(), "2");
        assert_eq!(engine.pending_operator(), Some(Operator::Add));
    }

    #[test]
    fn test_operator_without_operand_is_noop() {
        let mut engine = typed("2 +");
        engine.select_operator(Operator::Multiply).unwrap();
        assert_eq!(engine.previous_operand(), "2");
        assert_eq!(engine.pending_operator(), Some(Operator::Add));
    }

    #[test]
    fn test_chained_operators_fold() {
        let engine = typed("2 + 3 +");
        assert_eq!(engine.current_operand(), "");
        assert_eq!(engine.previous_operand(), "5");
        assert_eq!(engine.pending_operator(), Some(Operator::Add));

        assert_eq!(typed("2 + 3 * 4 =").current_operand(), "20");
    }

    #[test]
    fn test_result_can_be_extended_by_typing() {
        // The result becomes the current operand and digits append to it
        assert_eq!(typed("2 + 3 = 1").current_operand(), "51");
    }

    #[test]
    fn test_floating_point_result_not_rounded() {
        let engine = typed(". 1 + . 2 =");
        assert_eq!(engine.current_operand(), "0.30000000000000004");
        assert_eq!(engine.primary_display(), "0,30000000000000004");
    }

    #[test]
    fn test_division_by_zero_clears_and_reports() {
        let mut engine = CalculatorEngine::with_sink(RecordingSink::default());
        run(&mut engine, "1 0 / 0").unwrap();

        assert_eq!(engine.evaluate(), Err(CoreError::DivisionByZero));
        assert_cleared(&engine);
        assert_eq!(engine.sink().errors, vec![CoreError::DivisionByZero]);
        assert!(engine.sink().results.is_empty());
    }

    #[test]
    fn test_division_by_zero_point_zero() {
        let mut engine = typed("1 / 0 . 0");
        assert_eq!(engine.evaluate(), Err(CoreError::DivisionByZero));
        assert_cleared(&engine);
    }

    #[test]
    fn test_chained_division_by_zero_selects_on_zero() {
        let mut engine = CalculatorEngine::with_sink(RecordingSink::default());
        run(&mut engine, "8 / 0").unwrap();
        assert_eq!(engine.select_operator(Operator::Add), Ok(()));

        assert_eq!(engine.sink().errors, vec![CoreError::DivisionByZero]);
        assert_eq!(engine.previous_operand(), "0");
        assert_eq!(engine.pending_operator(), Some(Operator::Add));
        assert_eq!(engine.current_operand(), "");

        run(&mut engine, "5 =").unwrap();
        assert_eq!(engine.current_operand(), "5");
    }

    #[test]
    fn test_operator_rejects_non_numeric_operand() {
        let mut engine = typed("5 +/- «");
        let rejected = Err(CoreError::InvalidOperand {
            operand: "-".to_string(),
        });
        assert_eq!(engine.select_operator(Operator::Add), rejected);
        assert_eq!(engine.current_operand(), "-");
        assert_eq!(engine.previous_operand(), "");
        assert_eq!(engine.pending_operator(), None);

        // Still the current operand, so it can be fixed
        engine.backspace();
        run(&mut engine, "7 + 3 =").unwrap();
        assert_eq!(engine.current_operand(), "10");
    }

    #[test]
    fn test_chained_operator_rejects_non_numeric_operand() {
        let mut engine = typed("2 + 5 +/- «");
        assert!(engine.select_operator(Operator::Multiply).is_err());
        assert_eq!(engine.previous_operand(), "2");
        assert_eq!(engine.pending_operator(), Some(Operator::Add));
        assert_eq!(engine.current_operand(), "-");
    }

    #[test]
    fn test_sink_receives_results() {
        let mut engine = CalculatorEngine::with_sink(RecordingSink::default());
        run(&mut engine, "2 + 3 + 4 =").unwrap();
        assert_eq!(engine.sink().results, vec![5.0, 9.0]);
        assert!(engine.sink().errors.is_empty());
    }

    #[test]
    fn test_non_finite_results_can_be_chained() {
        let engine = typed("4 +/- √ = + 1 =");
        assert_eq!(engine.current_operand(), "NaN");

        let engine = typed("1 0 ^ 4 0 0 = * 2 =");
        assert_eq!(engine.current_operand(), "Infinity");
    }

    #[test]
    fn test_invalid_previous_operand_leaves_state() {
        let mut engine = typed("5 +/- « +");
        assert_eq!(engine.previous_operand(), "-");
        engine.append_digit_or_point('3').unwrap();
        assert_eq!(
            engine.evaluate(),
            Err(CoreError::InvalidOperand {
                operand: "-".to_string()
            })
        );
        assert_eq!(engine.current_operand(), "3");
        assert_eq!(engine.previous_operand(), "-");
    }

    // -------------------------------------------------------------------------
    // Clear
    // -------------------------------------------------------------------------

    #[test]
    fn test_clear_resets_everything() {
        let mut engine = typed("1 2 + 3");
        engine.clear();
        assert_cleared(&engine);
    }

    #[test]
    fn test_clear_then_noops_stays_cleared() {
        let mut engine = typed("9 * 9");
        run(&mut engine, "C 0 0 = « +/- =").unwrap();
        assert_cleared(&engine);
    }

    // -------------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------------

    #[test]
    fn test_displays() {
        let engine = typed("1 2 3 4 +");
        assert_eq!(engine.primary_display(), "");
        assert_eq!(engine.secondary_display(), "1234 + ");

        let engine = typed("1 2 3 4 + 5 6 7 8 . 9");
        assert_eq!(engine.primary_display(), "5.678,9");
        assert_eq!(engine.secondary_display(), "1234 + 5.678,9");
    }

    #[test]
    fn test_snapshot_font_scale() {
        assert_eq!(typed("1 2 3").snapshot().font_scale, FontScale::Default);
        assert_eq!(
            typed("1 2 3 4 5 6 7 8 9 0 1").snapshot().font_scale,
            FontScale::Medium
        );
        assert_eq!(
            typed("1 2 3 4 5 6 7 8 9 0 1 2 3 4 5").snapshot().font_scale,
            FontScale::Small
        );
    }
}
