// SPDX-License-Identifier: MPL-2.0
use iced::Size;
use salary_guard::app::{App, Flags, Frame, Message};
use salary_guard::config::{self, Config};
use salary_guard::domain::money::format_inr;
use salary_guard::domain::savings::{SavingsPercent, SavingsSplit, MONTHLY_SALARY};
use salary_guard::i18n::fluent::I18n;
use salary_guard::ui::theming::ThemeMode;
use salary_guard::ui::{banner, screens, viewport};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn select(app: &mut App, frame: Frame) {
    let _ = app.update(Message::Banner(banner::Message::SelectFrame(frame)));
}

fn slide(app: &mut App, percent: u8) {
    let _ = app.update(Message::Screen(screens::Message::PercentChanged(percent)));
}

#[test]
fn settings_file_drives_startup_state() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\ndisplay_name = \"Meera\"\ntheme_mode = \"dark\"\n\n[window]\nwidth = 700\nheight = 800\n",
    )
    .expect("Failed to write settings file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.window_size(), (700, 800));

    let (app, _task) = App::new(Flags::default(), config);
    assert_eq!(app.display_name(), "Meera");
    assert_eq!(app.theme_mode(), ThemeMode::Dark);
    assert!(app.is_narrow());
}

#[test]
fn malformed_settings_fall_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = ")
        .expect("Failed to write settings file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_some());
    assert_eq!(config, Config::default());
}

#[test]
fn missing_settings_file_is_not_an_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.display_name(), config::DEFAULT_DISPLAY_NAME);
}

#[test]
fn every_rate_keeps_salary_whole() {
    for value in SavingsPercent::MIN.value()..=SavingsPercent::MAX.value() {
        let split = SavingsSplit::at(SavingsPercent::new(value));
        assert_eq!(split.save + split.spend, MONTHLY_SALARY, "at {value}%");
    }
}

#[test]
fn slider_walkthrough_updates_every_derived_amount() {
    let mut app = App::default();
    assert_eq!(app.split(), SavingsSplit { save: 3000, spend: 22000 });

    slide(&mut app, 5);
    assert_eq!(app.split().save, 1250);
    assert_eq!(app.split().spend, 23750);

    slide(&mut app, 30);
    assert_eq!(app.split().save, 7500);
    assert_eq!(app.split().spend, 17500);
}

#[test]
fn viewport_threshold_is_768() {
    assert!(viewport::is_narrow(767.0));
    assert!(!viewport::is_narrow(768.0));

    let mut app = App::default();
    let _ = app.update(Message::WindowResized(Size::new(767.0, 900.0)));
    assert!(app.is_narrow());
    let _ = app.update(Message::WindowResized(Size::new(768.0, 900.0)));
    assert!(!app.is_narrow());
}

#[test]
fn navigation_reaches_every_frame_from_every_frame() {
    let mut app = App::default();
    let _ = app.update(Message::WindowResized(Size::new(1280.0, 960.0)));

    for from in Frame::ALL {
        for to in Frame::ALL {
            select(&mut app, from);
            select(&mut app, to);
            assert_eq!(app.selected_frame(), to);
        }
    }
}

#[test]
fn repeated_navigation_is_idempotent() {
    let mut app = App::default();
    select(&mut app, Frame::Onboarding);
    select(&mut app, Frame::Onboarding);
    assert_eq!(app.selected_frame(), Frame::Onboarding);
}

#[test]
fn confirmation_leads_to_success() {
    let mut app = App::default();
    select(&mut app, Frame::Confirmation);
    let _ = app.update(Message::Screen(screens::Message::ConfirmFingerprint));
    assert_eq!(app.selected_frame(), Frame::Success);
}

#[test]
fn scroll_animation_settles() {
    let mut app = App::default();
    let _ = app.update(Message::WindowResized(Size::new(1280.0, 960.0)));
    select(&mut app, Frame::Success);
    assert!(app.is_scrolling());

    let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(2)));
    assert!(!app.is_scrolling());
}

#[test]
fn layout_flip_cancels_scroll() {
    let mut app = App::default();
    let _ = app.update(Message::WindowResized(Size::new(1280.0, 960.0)));
    select(&mut app, Frame::Percentage);
    assert!(app.is_scrolling());

    let _ = app.update(Message::WindowResized(Size::new(500.0, 960.0)));
    assert!(!app.is_scrolling());
    assert_eq!(app.selected_frame(), Frame::Percentage);
}

#[test]
fn copy_renders_live_amounts() {
    let i18n = I18n::new().expect("embedded bundle should load");
    let split = SavingsSplit::at(SavingsPercent::default());
    let save = format_inr(split.save);
    let spend = format_inr(split.spend);

    assert_eq!(
        i18n.tr_with_args("percentage-save-preview", &[("amount", save.as_str())]),
        "Save ₹3,000/month"
    );
    assert_eq!(
        i18n.tr_with_args("percentage-spend-preview", &[("amount", spend.as_str())]),
        "Keep ₹22,000 for spending"
    );
    assert_eq!(
        i18n.tr_with_args("home-banner-title", &[("name", "Amit")]),
        "🚀 Amit, secure your future"
    );
}

#[test]
fn every_frame_has_heading_and_insight() {
    let i18n = I18n::new().expect("embedded bundle should load");
    for frame in Frame::ALL {
        assert!(!i18n.tr(frame.heading_key()).starts_with("MISSING"));
        assert!(!i18n.tr(frame.insight_key()).starts_with("MISSING"));
        assert!(!i18n.tr(frame.title_key()).starts_with("MISSING"));
    }
}
