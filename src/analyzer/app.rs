use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::input::{self, FormInput};
use crate::pricing::{CostCalculator, Sweep, Variable};
use crate::report;

/// Focusable elements of the analysis tab, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    X,
    Y,
    Z,
    Variable,
    Start,
    End,
    Generate,
}

impl Field {
    const ORDER: [Field; 7] = [
        Field::X,
        Field::Y,
        Field::Z,
        Field::Variable,
        Field::Start,
        Field::End,
        Field::Generate,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Content of the read-only result area
#[derive(Debug, Clone, PartialEq)]
pub enum ResultArea {
    Empty,
    Summary(Vec<String>),
    Warning(String),
}

/// Application state for the analyzer
pub struct AnalysisApp {
    pub form: FormInput,
    pub variable: Variable,
    pub focus: Field,
    pub samples: usize,
    pub calculator: CostCalculator,
    pub currency: String,
    /// Curves currently on the chart
    pub sweep: Sweep,
    pub result: ResultArea,
    pub last_update: Option<DateTime<Local>>,
}

impl AnalysisApp {
    /// Create the analyzer with the configured defaults in the form and the
    /// initial example plot on the chart
    pub fn new(cfg: &Config) -> Self {
        let defaults = &cfg.defaults;
        let form = FormInput::from_defaults(defaults);
        let calculator = CostCalculator::from_config(&cfg.pricing);

        let sweep = match input::validate(&form) {
            Ok(valid) => calculator.sweep(
                defaults.variable,
                &valid.params,
                &valid.range,
                defaults.samples,
            ),
            Err(e) => {
                warn!(error = %e, "Configured defaults cannot be plotted");
                Sweep {
                    variable: defaults.variable,
                    samples: Vec::new(),
                    school: Vec::new(),
                    bar: Vec::new(),
                }
            }
        };

        Self {
            form,
            variable: defaults.variable,
            focus: Field::X,
            samples: defaults.samples,
            calculator,
            currency: cfg.pricing.currency.clone(),
            sweep,
            result: ResultArea::Empty,
            last_update: None,
        }
    }

    /// Validate the form, then redraw the curves and the summary.
    ///
    /// On invalid input the chart keeps its previous curves and the result
    /// area shows the warning.
    pub fn generate(&mut self) -> Result<(), AppError> {
        let valid = match input::validate(&self.form) {
            Ok(valid) => valid,
            Err(e) => {
                warn!(error = %e, "Rejected form input");
                self.result = ResultArea::Warning(e.user_message());
                return Err(e);
            }
        };

        self.sweep = self
            .calculator
            .sweep(self.variable, &valid.params, &valid.range, self.samples);

        let rec = self.calculator.recommend(&valid.params);
        self.result = ResultArea::Summary(report::summary_lines(&rec, &self.currency));
        self.last_update = Some(Local::now());

        info!(
            variable = %self.variable,
            x = valid.params.hourly_rate,
            y = valid.params.speed_gbps,
            z = valid.params.data_gb,
            start = valid.range.start,
            end = valid.range.end,
            cheaper = %rec.cheaper,
            "Generated cost curves"
        );
        Ok(())
    }

    /// Handle keyboard input, returns true when the app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => {
                self.generate().ok();
            }
            KeyCode::Left if self.focus == Field::Variable => {
                self.variable = self.variable.prev();
            }
            KeyCode::Right if self.focus == Field::Variable => {
                self.variable = self.variable.next();
            }
            KeyCode::Backspace => {
                if let Some(text) = self.focused_text_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(text) = self.focused_text_mut() {
                    text.push(c);
                } else {
                    match c {
                        'q' | 'Q' => return true,
                        'g' | 'G' => {
                            self.generate().ok();
                        }
                        '1' => self.variable = Variable::X,
                        '2' => self.variable = Variable::Y,
                        '3' => self.variable = Variable::Z,
                        _ => {}
                    }
                }
            }
            _ => {}
        }

        debug!(focus = ?self.focus, variable = %self.variable, "Handled key");
        false
    }

    /// Current text of a form field, `None` for non-text fields
    pub fn field_text(&self, field: Field) -> Option<&str> {
        match field {
            Field::X => Some(&self.form.x),
            Field::Y => Some(&self.form.y),
            Field::Z => Some(&self.form.z),
            Field::Start => Some(&self.form.start),
            Field::End => Some(&self.form.end),
            Field::Variable | Field::Generate => None,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::X => Some(&mut self.form.x),
            Field::Y => Some(&mut self.form.y),
            Field::Z => Some(&mut self.form.z),
            Field::Start => Some(&mut self.form.start),
            Field::End => Some(&mut self.form.end),
            Field::Variable | Field::Generate => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_into(app: &mut AnalysisApp, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_initial_plot_uses_defaults() {
        let app = AnalysisApp::new(&Config::default());
        assert_eq!(app.sweep.variable, Variable::X);
        assert_eq!(app.sweep.len(), 100);
        assert_eq!(app.sweep.samples[0], 500.0);
        assert_eq!(app.sweep.samples[99], 2000.0);
        assert_eq!(app.result, ResultArea::Empty);
        assert!(app.last_update.is_none());
    }

    #[test]
    fn test_focus_wraps_around() {
        let mut app = AnalysisApp::new(&Config::default());
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.focus, Field::Generate);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Field::X);
    }

    #[test]
    fn test_editing_focused_field() {
        let mut app = AnalysisApp::new(&Config::default());
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Backspace));
        }
        type_into(&mut app, "12.5");
        assert_eq!(app.form.x, "12.5");
        assert_eq!(app.field_text(Field::X), Some("12.5"));
    }

    #[test]
    fn test_q_is_text_inside_a_field() {
        let mut app = AnalysisApp::new(&Config::default());
        assert!(!app.handle_key(key(KeyCode::Char('q'))));
        assert_eq!(app.form.x, "1000q");

        app.focus = Field::Generate;
        assert!(app.handle_key(key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let mut app = AnalysisApp::new(&Config::default());
        assert!(app.handle_key(key(KeyCode::Esc)));

        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert!(app.handle_key(ctrl_c));
    }

    #[test]
    fn test_variable_selector_cycles() {
        let mut app = AnalysisApp::new(&Config::default());
        app.focus = Field::Variable;
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.variable, Variable::Y);
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.variable, Variable::Z);
    }

    #[test]
    fn test_generate_updates_chart_and_summary() {
        let mut app = AnalysisApp::new(&Config::default());
        app.variable = Variable::Z;
        app.form.start = "3600".to_string();
        app.form.end = "7200".to_string();

        app.generate().unwrap();

        assert_eq!(app.sweep.variable, Variable::Z);
        assert_eq!(app.sweep.samples[0], 3600.0);
        assert!(app.last_update.is_some());
        match &app.result {
            ResultArea::Summary(lines) => {
                assert_eq!(lines[3], "Recommendation: Cybercafe");
            }
            other => panic!("Expected summary, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_generate_keeps_previous_chart() {
        let mut app = AnalysisApp::new(&Config::default());
        let before = app.sweep.clone();
        app.form.start = "2000".to_string();
        app.form.end = "500".to_string();

        let err = app.generate().unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(app.sweep, before);
        assert_eq!(
            app.result,
            ResultArea::Warning(crate::error::INVALID_INPUT_WARNING.to_string())
        );
        assert!(app.last_update.is_none());
    }

    #[test]
    fn test_g_generates_outside_text_fields() {
        let mut app = AnalysisApp::new(&Config::default());
        app.form.z = "-1".to_string();
        app.focus = Field::Generate;

        assert!(!app.handle_key(key(KeyCode::Char('g'))));
        assert_eq!(
            app.result,
            ResultArea::Warning(crate::error::INVALID_INPUT_WARNING.to_string())
        );
        assert_eq!(app.form.z, "-1");
    }

    #[test]
    fn test_digit_shortcuts_select_variable() {
        let mut app = AnalysisApp::new(&Config::default());
        app.focus = Field::Variable;
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.variable, Variable::Z);
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.variable, Variable::Y);
    }

    #[test]
    fn test_enter_generates() {
        let mut app = AnalysisApp::new(&Config::default());
        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(app.result, ResultArea::Summary(_)));
    }
}
