use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use yuuka::derive_struct;

// Include translation TOML at compile time
const EN_US_TOML: &str = include_str!("../res/i18n/en_us.toml");

derive_struct! {
    #[derive(PartialEq, Serialize, Deserialize)]
    pub Lang {
        title: String = "title".to_string(),
        untitled_page: String = "untitled_page".to_string(),

        hints: {
            move_vertical: String = "move_vertical".to_string(),
            enter_open: String = "enter_open".to_string(),
            enter_edit: String = "enter_edit".to_string(),
            edit_buffer: String = "edit_buffer".to_string(),
            cycle_choice: String = "cycle_choice".to_string(),
            confirm_cancel: String = "confirm_cancel".to_string(),
            reorder: String = "reorder".to_string(),
            remove: String = "remove".to_string(),
            save: String = "save".to_string(),
            back: String = "back".to_string(),
            quit: String = "quit".to_string(),
            clear_error: String = "clear_error".to_string(),
            toggle_panel: String = "toggle_panel".to_string(),
        },

        entry: {
            title: String = "entry_title".to_string(),
            no_blocks: String = "no_blocks".to_string(),
            add_block: String = "add_block".to_string(),
            add_block_hint: String = "add_block_hint".to_string(),
            preview: String = "preview".to_string(),
            about: String = "about".to_string(),
            remove_failed: String = "remove_failed".to_string(),
        },

        editor: {
            title: String = "editor_title".to_string(),
            missing_block: String = "missing_block".to_string(),
            add_item: String = "add_item".to_string(),
            add_row: String = "add_row".to_string(),
            row_label: String = "row_label".to_string(),
            preview_heading: String = "preview_heading".to_string(),
        },

        preview: {
            title: String = "preview_title".to_string(),
            empty_page: String = "empty_page".to_string(),
            form_placeholder: String = "form_placeholder".to_string(),
        },

        about: {
            title: String = "about_title".to_string(),
            keys_heading: String = "keys_heading".to_string(),
        },
    }
}

static LANG_SELECTED: OnceCell<Lang> = OnceCell::new();
static LOCALE: OnceCell<String> = OnceCell::new();

fn parse_toml_to_lang(content: &str) -> Lang {
    match toml::from_str::<Lang>(content) {
        Ok(lang) => lang,
        Err(err) => {
            log::warn!(
                "i18n: failed to parse toml: {}\ncontent preview: {}",
                err,
                &content.chars().take(200).collect::<String>()
            );
            // Fallback: return the default Lang (keys as values)
            Lang::default()
        }
    }
}

/// Return a reference to the currently selected `Lang`.
/// Callers can access fields directly, e.g. `i18n::lang().title`.
pub fn lang() -> &'static Lang {
    // If init_i18n hasn't run, fall back to the default Lang.
    LANG_SELECTED.get_or_init(Lang::default)
}

pub fn init_i18n() {
    let selected = parse_toml_to_lang(EN_US_TOML);
    LOCALE.set("en_us".to_string()).ok();
    LANG_SELECTED.set(selected).ok();

    log::info!(
        "i18n: locale={}",
        LOCALE.get().map(|s| s.as_str()).unwrap_or("-")
    );
}
