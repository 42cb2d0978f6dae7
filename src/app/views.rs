//! View rendering (header tabs, plan form, advice search, notice modal)

use super::form::FieldUpdate;
use super::loader::LoadStatus;
use super::submission::SubmissionMessage;
use super::App;
use crate::constants::INCOMPLETE_FORM_NOTICE;
use crate::theme;
use crate::types::*;
use crate::ui::components::{chip, field_label, flag_badge, status_text};
use eframe::egui;
use egui_phosphor::regular as icons;
use tracing::debug;

const SELECT_COUNTRY: &str = "-- Select a country --";
const SELECT_MONTH: &str = "-- Select a month --";
const SELECT_DURATION: &str = "Select duration";

#[derive(Clone, Copy, PartialEq, Eq)]
enum CountryField {
    Residence,
    Passport,
}

impl App {
    // ========================================================================
    // HEADER
    // ========================================================================

    pub(crate) fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .exact_height(theme::HEADER_HEIGHT)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(16, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!("{}  TRAVEL ADVISOR", icons::AIRPLANE_TILT))
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let tabs = [
                            (View::Search, icons::MAGNIFYING_GLASS, "Search"),
                            (View::Plan, icons::MAP_TRIFOLD, "Plan"),
                        ];
                        for (view, icon, label) in tabs {
                            let tab = format!("{}  {}", icon, label);
                            if chip(ui, &tab, self.view == view).clicked() && self.view != view {
                                self.view = view;
                                self.focus_search = view == View::Search;
                            }
                        }
                    });
                });
            });
    }

    pub(crate) fn render_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        centered_column(ui, |ui| match self.view {
                            View::Plan => self.render_plan_view(ui),
                            View::Search => self.render_search_view(ui),
                        });
                    });
            });
    }

    // ========================================================================
    // PLAN VIEW
    // ========================================================================

    fn render_plan_view(&mut self, ui: &mut egui::Ui) {
        hero(
            ui,
            "Hi, I'm your Travel Advisor!",
            "Let's plan your next trip together. Please fill out the form below to get personalized travel advice.",
        );

        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());

            // Trip type
            field_label(ui, "Trip Type:");
            ui.horizontal(|ui| {
                for trip in TripType::ALL {
                    let selected = self.plan.selection.trip_type == Some(trip);
                    if chip(ui, trip.label(), selected).clicked() {
                        self.plan.set_field(FieldUpdate::TripType(Some(trip)));
                    }
                }
            });
            ui.add_space(theme::SPACING_LG);

            // Travel style
            field_label(ui, "What type of travel are you interested in?");
            ui.horizontal_wrapped(|ui| {
                for style in TravelStyle::ALL {
                    let selected = self.plan.selection.travel_style == Some(style);
                    if chip(ui, style.label(), selected).clicked() {
                        self.plan.set_field(FieldUpdate::TravelStyle(Some(style)));
                    }
                }
            });
            ui.add_space(theme::SPACING_LG);

            // Duration
            field_label(ui, "How many days?");
            let current = self.plan.selection.duration;
            let mut picked = None;
            egui::ComboBox::from_id_salt("duration_select")
                .width(ui.available_width())
                .selected_text(
                    current
                        .map(|d| d.label())
                        .unwrap_or_else(|| SELECT_DURATION.to_string()),
                )
                .show_ui(ui, |ui| {
                    if ui.selectable_label(current.is_none(), SELECT_DURATION).clicked() {
                        picked = Some(None);
                    }
                    for bucket in DurationBucket::ALL {
                        if ui.selectable_label(current == Some(bucket), bucket.label()).clicked() {
                            picked = Some(Some(bucket));
                        }
                    }
                });
            if let Some(duration) = picked {
                self.plan.set_field(FieldUpdate::Duration(duration));
            }
            ui.add_space(theme::SPACING_LG);

            self.render_country_select(ui, CountryField::Residence);
            ui.add_space(theme::SPACING_LG);
            self.render_country_select(ui, CountryField::Passport);
            ui.add_space(theme::SPACING_LG);

            // Month
            field_label(ui, "When do you plan to travel?");
            let current = self.plan.selection.month;
            let mut picked = None;
            egui::ComboBox::from_id_salt("month_select")
                .width(ui.available_width())
                .height(theme::COMBO_MAX_HEIGHT)
                .selected_text(current.map(|m| m.name()).unwrap_or(SELECT_MONTH))
                .show_ui(ui, |ui| {
                    if ui.selectable_label(current.is_none(), SELECT_MONTH).clicked() {
                        picked = Some(None);
                    }
                    for month in TravelMonth::all() {
                        if ui.selectable_label(current == Some(month), month.name()).clicked() {
                            picked = Some(Some(month));
                        }
                    }
                });
            if let Some(month) = picked {
                self.plan.set_field(FieldUpdate::Month(month));
            }
            ui.add_space(theme::SPACING_XL);

            // Submit
            ui.vertical_centered(|ui| {
                let enabled = self.plan.can_submit();
                let label = if self.plan.submission.is_in_flight() {
                    "Sending..."
                } else {
                    "Get Personalized Advice"
                };
                let text = format!("{}  {}", icons::PAPER_PLANE_TILT, label);
                let button = theme::button_accent(text, enabled)
                    .min_size(egui::vec2(256.0, theme::BUTTON_HEIGHT_LARGE));
                if ui.add_enabled(enabled, button).clicked() {
                    if let Err(e) = self.plan.submit(&self.spawner) {
                        debug!(error = %e, "Submission blocked, showing notice");
                    }
                }

                match self.plan.submission.message() {
                    Some(SubmissionMessage::Confirmed(msg)) => {
                        ui.add_space(theme::SPACING_MD);
                        let text = format!("{}  {}", icons::CHECK_CIRCLE, msg);
                        status_text(ui, &text, theme::STATUS_SUCCESS);
                    }
                    Some(SubmissionMessage::Failed(msg)) => {
                        ui.add_space(theme::SPACING_MD);
                        let text = format!("{}  {}", icons::WARNING_CIRCLE, msg);
                        status_text(ui, &text, theme::STATUS_ERROR);
                    }
                    None => {}
                }
            });
        });
    }

    fn render_country_select(&mut self, ui: &mut egui::Ui, field: CountryField) {
        let (id, label) = match field {
            CountryField::Residence => ("residence_select", "Which country are you residing in?"),
            CountryField::Passport => ("passport_select", "Which country passport do you have?"),
        };
        field_label(ui, label);

        let status = self.plan.loader.status().clone();
        match status {
            LoadStatus::Pending => status_text(ui, "Loading countries...", theme::ACCENT),
            LoadStatus::Failed(msg) => {
                status_text(ui, &format!("Error: {}", msg), theme::STATUS_ERROR)
            }
            LoadStatus::Loaded => {
                let selected_code = match field {
                    CountryField::Residence => self.plan.selection.residence_code.clone(),
                    CountryField::Passport => self.plan.selection.passport_code.clone(),
                };
                let catalog = self.plan.loader.catalog();
                let selected_text = selected_code
                    .as_deref()
                    .and_then(|code| catalog.lookup(code))
                    .map(|c| c.common_name.clone())
                    .unwrap_or_else(|| SELECT_COUNTRY.to_string());

                let mut picked: Option<Option<String>> = None;
                egui::ComboBox::from_id_salt(id)
                    .width(ui.available_width())
                    .height(theme::COMBO_MAX_HEIGHT)
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        if ui.selectable_label(selected_code.is_none(), SELECT_COUNTRY).clicked() {
                            picked = Some(None);
                        }
                        for country in catalog.countries() {
                            let selected =
                                selected_code.as_deref() == Some(country.alpha2_code.as_str());
                            if ui.selectable_label(selected, &country.common_name).clicked() {
                                picked = Some(Some(country.alpha2_code.clone()));
                            }
                        }
                    });
                if let Some(code) = picked {
                    self.plan.set_field(match field {
                        CountryField::Residence => FieldUpdate::ResidenceCountry(code),
                        CountryField::Passport => FieldUpdate::PassportCountry(code),
                    });
                }
            }
        }

        let catalog = self.plan.loader.catalog();
        let country = match field {
            CountryField::Residence => self.plan.selection.residence_country(catalog),
            CountryField::Passport => self.plan.selection.passport_country(catalog),
        }
        .cloned();
        if let Some(country) = country {
            let flag = self.flags.get(ui.ctx(), &country, &self.http, &self.spawner);
            ui.add_space(theme::SPACING_SM);
            flag_badge(ui, flag.as_ref(), &country.common_name);
        }
    }

    // ========================================================================
    // SEARCH VIEW
    // ========================================================================

    fn render_search_view(&mut self, ui: &mut egui::Ui) {
        hero(
            ui,
            &format!("Hi! I'm your Travel Advisor {}", icons::HAND_WAVING),
            "Planning your next trip? Get personalized travel advice based on your interests and preferences.",
        );

        let searching = self.search.is_searching();
        let mut submit = false;
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let button_width = 140.0;
                let input = ui.add(
                    egui::TextEdit::singleline(&mut self.search.query)
                        .hint_text("e.g., Paris, Japan, or beach trips")
                        .desired_width(ui.available_width() - button_width - theme::SPACING_MD)
                        .min_size(egui::vec2(0.0, theme::BUTTON_HEIGHT_LARGE))
                        .vertical_align(egui::Align::Center),
                );
                if self.focus_search {
                    self.focus_search = false;
                    input.request_focus();
                }
                if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }

                let label = if searching { "Searching..." } else { "Get Advice" };
                let button = theme::button_accent(label, !searching)
                    .min_size(egui::vec2(button_width, theme::BUTTON_HEIGHT_LARGE));
                if ui.add_enabled(!searching, button).clicked() {
                    submit = true;
                }
            });
        });
        if submit && !searching {
            self.search.submit(&self.spawner);
        }

        ui.add_space(theme::SPACING_LG);
        if self.search.is_searching() {
            ui.vertical_centered(|ui| {
                status_text(ui, "Searching for advice...", theme::ACCENT);
            });
            ui.add_space(theme::SPACING_MD);
        }

        if !self.search.results().is_empty() {
            for entry in self.search.results() {
                theme::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(format!("{}  {}", icons::MAP_PIN, entry.destination))
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::TEXT_SECONDARY),
                    );
                    ui.add_space(theme::SPACING_SM);
                    ui.label(
                        egui::RichText::new(entry.advice)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_MUTED),
                    );
                });
                ui.add_space(theme::SPACING_MD);
            }
        } else if !self.search.is_searching() {
            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_XL);
                status_text(ui, "Enter your travel query above to find advice!", theme::TEXT_DIM);
            });
        }
    }

    // ========================================================================
    // NOTICE MODAL
    // ========================================================================

    pub(crate) fn render_incomplete_notice(&mut self, ctx: &egui::Context) {
        if !self.plan.show_incomplete_notice {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("incomplete_notice"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_width(320.0);
            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(icons::WARNING_CIRCLE)
                        .size(36.0)
                        .color(theme::STATUS_ERROR),
                );
                ui.add_space(theme::SPACING_MD);
                ui.label(egui::RichText::new(INCOMPLETE_FORM_NOTICE).size(theme::FONT_BODY));
                ui.add_space(theme::SPACING_XL);
                if ui.add(theme::button(format!("{}  OK", icons::CHECK))).clicked() {
                    self.plan.show_incomplete_notice = false;
                }
            });
        });
        if modal_response.should_close() {
            self.plan.show_incomplete_notice = false;
        }
    }
}

/// Lays out a column of at most `CONTENT_MAX_WIDTH`, centered horizontally
fn centered_column(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    let available = ui.available_width();
    let width = available.min(theme::CONTENT_MAX_WIDTH);
    let margin = ((available - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui);
        });
    });
}

fn hero(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.add_space(theme::SPACING_XL);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(title)
                .size(theme::FONT_HERO)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(theme::SPACING_SM);
        ui.label(egui::RichText::new(subtitle).size(theme::FONT_BODY).color(theme::TEXT_MUTED));
    });
    ui.add_space(theme::SPACING_XL);
}
