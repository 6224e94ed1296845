#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    use crate::domain::{ChestPain, FeatureColumn};
    use crate::ml::{Activation, Artifacts, DenseLayer, DenseNetwork, StandardScaler};
    use crate::predictor::Predictor;
    use crate::tui::{ui, FormApp, KeyAction};

    fn app() -> FormApp {
        let scaler = StandardScaler {
            feature_names: None,
            mean: vec![0.0; 11],
            scale: vec![1.0; 11],
        };
        let network = DenseNetwork {
            input_dim: 11,
            layers: vec![DenseLayer {
                weights: vec![vec![0.0; 11]],
                bias: vec![-1.0],
                activation: Activation::Sigmoid,
            }],
            metadata: serde_json::Value::Null,
        };
        let artifacts = Arc::new(Artifacts::new(scaler, Box::new(network)).unwrap());
        FormApp::new(Predictor::new(artifacts))
    }

    fn screen(app: &FormApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| ui::render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_key_mapping() {
        let key = |code| KeyAction::from(KeyEvent::new(code, KeyModifiers::NONE));
        assert_eq!(key(KeyCode::Tab), KeyAction::NextField);
        assert_eq!(key(KeyCode::BackTab), KeyAction::PrevField);
        assert_eq!(key(KeyCode::Char('+')), KeyAction::Increase);
        assert_eq!(key(KeyCode::Char('7')), KeyAction::Input('7'));
        assert_eq!(key(KeyCode::Enter), KeyAction::Submit);
        assert_eq!(key(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(
            KeyAction::from(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_editing_does_not_predict() {
        let mut app = app();
        app.handle_key(KeyAction::Increase);
        app.handle_key(KeyAction::NextField);
        app.handle_key(KeyAction::Decrease);
        assert!(app.session.result().is_none());
        assert_eq!(app.session.submissions(), 0);
        assert_eq!(app.form.values().age, 51.0);
        assert_eq!(app.form.values().trestbps, 119.0);
    }

    #[test]
    fn test_submit_shows_result() {
        let mut app = app();
        app.handle_key(KeyAction::Submit);
        let result = app.session.result().unwrap();
        // sigmoid(-1) ~ 0.2689
        assert_eq!(result.percent, "26.89%");
        assert!(!result.level.is_high());

        let text = screen(&app);
        assert!(text.contains("26.89%"));
        assert!(text.contains("Risiko Rendah"));
    }

    #[test]
    fn test_rejected_entry_blocks_submit() {
        let mut app = app();
        for c in "999".chars() {
            app.handle_key(KeyAction::Input(c));
        }
        app.handle_key(KeyAction::Submit);
        assert_eq!(app.session.submissions(), 0);
        assert!(screen(&app).contains("nilai harus antara 1 dan 120"));
    }

    #[test]
    fn test_choice_cycling_via_keys() {
        let mut app = app();
        app.form.focus_column(FeatureColumn::Cp);
        app.handle_key(KeyAction::Increase);
        assert_eq!(app.form.values().cp, ChestPain::TypicalAngina);
    }

    #[test]
    fn test_escape_cancels_edit_then_quits() {
        let mut app = app();
        app.handle_key(KeyAction::Input('4'));
        app.handle_key(KeyAction::Cancel);
        assert!(app.is_running());
        assert_eq!(app.form.values().age, 50.0);
        app.handle_key(KeyAction::Cancel);
        assert!(!app.is_running());
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        app.handle_key(KeyAction::Help);
        assert!(app.show_help);
        app.handle_key(KeyAction::Submit);
        assert_eq!(app.session.submissions(), 0);
        assert!(screen(&app).contains("BANTUAN"));
        app.handle_key(KeyAction::Help);
        assert!(!app.show_help);
    }

    #[test]
    fn test_initial_screen_lists_sections() {
        let text = screen(&app());
        assert!(text.contains("Data Umum & Klinis"));
        assert!(text.contains("Data Kategorikal"));
        assert!(text.contains("Prediksi Risiko"));
        assert!(text.contains("dense mlp 11-1"));
    }

    #[test]
    fn test_choice_rows_render_as_selectors() {
        let text = screen(&app());
        assert!(text.contains("< Pria >"));
        assert!(text.contains("< Asymptomatic (Tipe 4) >"));
    }
}
