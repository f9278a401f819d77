use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    Res,
    cli::render,
    error, facts, info,
    nasa::ApodClient,
    success,
    types::DateInputs,
    ui::{DateRangePicker, GalleryController, ModalTarget},
    utils::{self, PromptAction},
    warning,
};

/// Fetches and shows the gallery for a date range.
///
/// Dates that are not given fall back to the picker's default window (the last
/// nine days). Given dates are clamped into the archive bounds; dates that do
/// not parse are left alone and rejected by validation.
///
/// # Arguments
///
/// * `start_date` - First day of the range (YYYY-MM-DD)
/// * `end_date` - Last day of the range (YYYY-MM-DD)
/// * `open` - Tile to open in the modal once the gallery is shown
/// * `interactive` - Keep prompting for tiles to open after rendering
///
/// # Example Usage
///
/// ```bash
/// apodcli gallery
/// apodcli gallery --start-date 2024-01-01 --end-date 2024-01-10 --open 2
/// apodcli gallery --interactive
/// ```
pub async fn gallery(
    start_date: Option<String>,
    end_date: Option<String>,
    open: Option<usize>,
    interactive: bool,
) {
    info!("{}", facts::random_fact());

    let picker = DateRangePicker::for_today();
    let mut inputs = DateInputs::default();
    picker.setup(&mut inputs);
    if let Some(start) = start_date {
        picker.select_start(&mut inputs, &start);
    }
    if let Some(end) = end_date {
        picker.select_end(&mut inputs, &end);
    }

    let client = match ApodClient::from_env() {
        Ok(client) => client,
        Err(e) => error!("Cannot create APOD client: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!(
        "Fetching pictures from {start} to {end}...",
        start = inputs.start,
        end = inputs.end
    ));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let mut controller = GalleryController::new();
    let rendered = controller
        .search(&client, &inputs.start, &inputs.end)
        .await;
    pb.finish_and_clear();

    if rendered && !controller.tiles().is_empty() {
        success!(
            "{count} pictures from {start} to {end}.",
            count = controller.tiles().len(),
            start = inputs.start,
            end = inputs.end
        );
    }
    render::gallery_view(controller.view());

    if let Some(position) = open {
        open_tile(&mut controller, position);
    }

    if interactive && !controller.tiles().is_empty() {
        if let Err(e) = prompt_loop(&mut controller).await {
            warning!("Interactive session ended: {}", e);
        }
    }
}

fn open_tile(controller: &mut GalleryController, position: usize) {
    match controller.open_tile(position) {
        Some(view) => render::modal(view),
        None => warning!("Tile {} does not exist.", position),
    }
}

fn click(controller: &mut GalleryController, target: ModalTarget) {
    if !controller.click_modal(target) {
        render::gallery_view(controller.view());
    }
}

fn launch(controller: &GalleryController) {
    let Some(media) = controller.modal().view().and_then(|v| v.media.as_ref()) else {
        warning!("Nothing to open for this entry.");
        return;
    };

    if webbrowser::open(media.target()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            media.target()
        );
    }
}

async fn prompt_loop(controller: &mut GalleryController) -> Res<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let modal_open = controller.modal().is_visible();
        render::prompt(modal_open)?;

        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };

        match utils::parse_prompt_input(&line, modal_open) {
            PromptAction::Quit => return Ok(()),
            PromptAction::Open(position) => open_tile(controller, position),
            PromptAction::CloseControl => click(controller, ModalTarget::CloseControl),
            PromptAction::Backdrop => click(controller, ModalTarget::Backdrop),
            PromptAction::Content => click(controller, ModalTarget::Content),
            PromptAction::Launch => launch(controller),
            PromptAction::Unknown => warning!("Unknown input: {:?}", line.trim()),
        }
    }
}
