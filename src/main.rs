use fltk::{
    app,
    enums::Font,
    prelude::*,
    text::WrapMode,
};

use code_vault::app::{
    AppSettings, EditorController, Effect, HighlightEngine, Message, NativeGateway,
    PreviewRenderer, WidgetBuffer, WidgetBufferFactory,
};
use code_vault::ui::{
    self,
    file_tree::FileTree,
    main_window::MainWidgets,
};

const EDITOR_FONT: Font = Font::Courier;

/// How often the dispatch loop polls the preview debounce deadline.
const PREVIEW_TICK_SECONDS: f64 = 0.25;

fn main() {
    env_logger::init();

    let fltk_app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();

    let mut launcher = ui::launcher::build_launcher(&sender);
    launcher.show();

    // The editor window is built up front and shown after a successful unlock
    let mut widgets = ui::main_window::build_main_window(&sender);
    ui::menu::build_menu(&mut widgets.menu, &sender);
    let mut tree = FileTree::new(widgets.tree.clone(), sender);
    tree.rebuild(None, &[]);
    ui::preview_pane::show_placeholder(&mut widgets.preview);
    ui::theme::apply_theme(&mut widgets, settings.theme);

    let preview = match PreviewRenderer::new() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("snapshot dir unavailable ({}), using temp dir", e);
            PreviewRenderer::with_dir(
                std::env::temp_dir(),
                code_vault::app::preview::DEBOUNCE_INTERVAL,
                code_vault::app::preview::SNAPSHOT_GRACE,
            )
        }
    };

    let mut controller = EditorController::new(
        Box::new(NativeGateway::new()),
        Box::new(WidgetBufferFactory::new(sender)),
        settings.clone(),
        preview,
    );

    // Highlighting is optional: without it the editor degrades to plain text
    let mut highlight = match HighlightEngine::new(settings.theme, EDITOR_FONT, settings.font_size as i32) {
        Ok(engine) => Some(engine),
        Err(e) => {
            log::warn!("syntax highlighting unavailable: {}", e);
            None
        }
    };

    apply_editor_settings(&mut widgets, &controller.settings);

    app::add_timeout3(PREVIEW_TICK_SECONDS, move |handle| {
        sender.send(Message::PreviewTick);
        app::repeat_timeout3(PREVIEW_TICK_SECONDS, handle);
    });

    while fltk_app.wait() {
        let Some(msg) = receiver.recv() else { continue };

        match msg {
            Message::LaunchEditor => {
                launcher.hide();
                widgets.window.show();
                let effects = controller.handle(Message::LaunchEditor);
                apply_effects(effects, &mut controller, &mut widgets, &mut tree, &mut highlight, &sender);
            }
            Message::EditUndo => widgets.editor.undo(),
            Message::EditCut => widgets.editor.cut(),
            Message::EditCopy => widgets.editor.copy(),
            Message::EditPaste => widgets.editor.paste(),
            Message::SelectAll => widgets.editor.kf_select_all(),
            Message::ContentChanged(id) => {
                let effects = controller.handle(Message::ContentChanged(id));
                restyle_active(&mut controller, &mut widgets, &mut highlight);
                apply_effects(effects, &mut controller, &mut widgets, &mut tree, &mut highlight, &sender);
            }
            other => {
                let effects = controller.handle(other);
                apply_effects(effects, &mut controller, &mut widgets, &mut tree, &mut highlight, &sender);
            }
        }
    }

    controller.preview_mut().cleanup();
}

fn apply_effects(
    effects: Vec<Effect>,
    controller: &mut EditorController,
    widgets: &mut MainWidgets,
    tree: &mut FileTree,
    highlight: &mut Option<HighlightEngine>,
    sender: &app::Sender<Message>,
) {
    for effect in effects {
        match effect {
            Effect::BindActiveTab => bind_active_tab(controller, widgets, highlight),
            Effect::RefreshTabStrip => {
                widgets.tab_bar.rebuild(
                    controller.tabs.tabs(),
                    controller.tabs.active_index(),
                    controller.settings.theme.is_dark(),
                );
                update_status(controller, widgets);
            }
            Effect::RefreshFileTree => {
                tree.rebuild(controller.folder.as_deref(), &controller.entries);
            }
            Effect::UpdateTitle => update_title(controller, widgets),
            Effect::LoadPreview(path) => {
                ui::preview_pane::load_snapshot(&mut widgets.preview, &path);
            }
            Effect::Notify(notice) => {
                ui::notification::show_notice(&mut widgets.banner, &mut widgets.flex, &notice);
            }
            Effect::ConfirmClose { index, name } => {
                let choice = ui::dialogs::close_confirm::ask_save_before_close(&name);
                sender.send(Message::CloseResolved(index, choice));
            }
            Effect::OpenSettingsDialog => {
                if let Some(new_settings) =
                    ui::dialogs::settings_dialog::show_settings_dialog(&controller.settings)
                {
                    sender.send(Message::SettingsApplied(new_settings));
                }
            }
            Effect::ApplySettings => {
                ui::theme::apply_theme(widgets, controller.settings.theme);
                apply_editor_settings(widgets, &controller.settings);
                if let Some(engine) = highlight {
                    engine.set_theme(
                        controller.settings.theme,
                        EDITOR_FONT,
                        controller.settings.font_size as i32,
                    );
                }
                restyle_active(controller, widgets, highlight);
            }
            Effect::Quit => app::quit(),
        }
    }
}

/// Point the editor widget at the active tab's buffers and restyle.
fn bind_active_tab(
    controller: &mut EditorController,
    widgets: &mut MainWidgets,
    highlight: &mut Option<HighlightEngine>,
) {
    let Some(doc) = controller.tabs.active() else { return };
    let Some(wb) = doc.buffer.as_any().downcast_ref::<WidgetBuffer>() else {
        return;
    };
    widgets.editor.set_buffer(wb.text_buffer());
    restyle_active(controller, widgets, highlight);
    update_status(controller, widgets);
}

/// Recompute the style string for the whole active document. Documents in
/// this editor are small enough that a full restyle per edit stays smooth.
fn restyle_active(
    controller: &mut EditorController,
    widgets: &mut MainWidgets,
    highlight: &mut Option<HighlightEngine>,
) {
    let Some(engine) = highlight else { return };
    let Some(doc) = controller.tabs.active() else { return };
    let Some(wb) = doc.buffer.as_any().downcast_ref::<WidgetBuffer>() else {
        return;
    };

    let styles = engine.style_string(&doc.buffer.contents(), doc.language);
    let mut style_buffer = wb.style_buffer();
    style_buffer.set_text(&styles);
    widgets.editor.set_highlight_data(style_buffer, engine.style_table());
    widgets.editor.redraw();
}

fn apply_editor_settings(widgets: &mut MainWidgets, settings: &AppSettings) {
    widgets.editor.set_text_font(EDITOR_FONT);
    widgets.editor.set_text_size(settings.font_size as i32);
    if settings.word_wrap {
        widgets.editor.wrap_mode(WrapMode::AtBounds, 0);
    } else {
        widgets.editor.wrap_mode(WrapMode::None, 0);
    }
    widgets
        .editor
        .set_linenumber_width(if settings.line_numbers { 40 } else { 0 });
    widgets.editor.redraw();
}

fn update_title(controller: &EditorController, widgets: &mut MainWidgets) {
    let title = match controller.tabs.active() {
        Some(doc) => {
            let marker = if doc.modified { "\u{25cf} " } else { "" };
            format!("{}{} - CodeVault", marker, doc.display_name)
        }
        None => "CodeVault".to_string(),
    };
    widgets.window.set_label(&title);
}

fn update_status(controller: &EditorController, widgets: &mut MainWidgets) {
    let label = match controller.tabs.active() {
        Some(doc) => {
            let text = doc.buffer.contents();
            let lines = text.lines().count().max(1);
            let words = text.split_whitespace().count();
            format!(
                "  {}  |  {} lines, {} words, {} chars",
                doc.language.id(),
                lines,
                words,
                text.chars().count()
            )
        }
        None => String::new(),
    };
    widgets.status.set_label(&label);
}
