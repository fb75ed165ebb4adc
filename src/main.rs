use iced::widget::image::Handle;
use iced::widget::{button, column, container, horizontal_rule, row, scrollable, text, Column};
use iced::{time, Element, Length, Subscription, Task, Theme};
use iced_aw::Wrap;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

mod config;
mod remote;
mod state;
mod ui;

use config::{AppConfig, ThemeChoice};
use remote::loader;
use remote::ImageStore;
use state::catalog::{Catalog, CatalogError};
use state::selection::Selection;
use state::transfer::{self, TransferJob};
use ui::card::{card, CARD_SIZE};
use ui::spinner::Spinner;

/// Spacing between cards in a grid (px)
const GRID_SPACING: f32 = 16.0;

/// Errors that stop the application from starting
#[derive(Error, Debug)]
enum AppError {
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
    #[error("ui: {0}")]
    Ui(#[from] iced::Error),
}

/// Main application state
struct StyleShift {
    /// Catalog plus the current product/style selection
    selection: Selection,
    /// Load state of every catalog image
    images: ImageStore,
    config: AppConfig,
    /// Start angle of the processing spinner
    spinner_phase: f32,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked a product card
    SelectProduct(String),
    /// User clicked a style card
    SelectStyle(String),
    /// User clicked "Apply Style Transfer"
    ApplyTransfer,
    /// A transfer's processing delay elapsed
    TransferFinished(TransferJob),
    /// A catalog image finished downloading (or failed)
    ImageLoaded(String, Result<Handle, String>),
    /// Spinner animation frame
    Tick(time::Instant),
    /// Header cart button
    OpenCart,
    /// Header sign-in button
    SignIn,
}

impl StyleShift {
    /// Create the application and start fetching every catalog image
    fn new(catalog: Catalog, config: AppConfig, client: reqwest::Client) -> (Self, Task<Message>) {
        let mut images = ImageStore::default();
        let uris = images.request(catalog.image_uris());

        info!(
            "🎨 StyleShift initialized: {} images to fetch, {}ms transfer delay",
            uris.len(),
            config.transfer_delay_ms
        );

        let fetches = uris.into_iter().map(|uri| {
            let fetch = loader::load_image(client.clone(), uri.clone(), config.image_max_size);
            Task::perform(fetch, move |result| Message::ImageLoaded(uri.clone(), result))
        });
        let task = Task::batch(fetches);

        let app = StyleShift {
            selection: Selection::new(catalog),
            images,
            config,
            spinner_phase: 0.0,
            status: String::from("Pick a product and a style."),
        };

        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectProduct(id) => {
                if self.selection.select_product(&id) {
                    debug!("Selected product {}", id);
                }
                Task::none()
            }
            Message::SelectStyle(id) => {
                if self.selection.select_style(&id) {
                    debug!("Selected style {}", id);
                }
                Task::none()
            }
            Message::ApplyTransfer => {
                let job = self.selection.apply_transfer();
                info!(
                    "⏳ Transfer #{} started at {}: {} / {}",
                    job.id,
                    job.started_at.format("%H:%M:%S%.3f"),
                    job.product_id,
                    job.style_id
                );
                self.status = String::from("Processing...");

                Task::perform(
                    transfer::simulate(job, self.config.transfer_delay()),
                    Message::TransferFinished,
                )
            }
            Message::TransferFinished(job) => {
                let receipt = self.selection.finish_transfer(job);
                let catalog = self.selection.catalog();
                let product = catalog
                    .product(&receipt.product_id)
                    .map_or(receipt.product_id.as_str(), |p| p.name.as_str());
                let style = catalog
                    .style(&receipt.style_id)
                    .map_or(receipt.style_id.as_str(), |s| s.name.as_str());

                self.status = format!(
                    "✅ Applied {} to {} at {}",
                    style,
                    product,
                    receipt.completed_at.format("%H:%M:%S")
                );
                info!(
                    "✅ Transfer #{} complete: {}",
                    receipt.job_id,
                    receipt.image_url.as_deref().unwrap_or("<no image>")
                );

                Task::none()
            }
            Message::ImageLoaded(uri, result) => {
                self.images.finish(uri, result);
                if self.images.pending() == 0 {
                    debug!("All catalog images settled");
                }
                Task::none()
            }
            Message::Tick(_) => {
                self.spinner_phase = Spinner::advance(self.spinner_phase);
                Task::none()
            }
            Message::OpenCart | Message::SignIn => {
                info!("{:?} is not available in this demo", message);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let catalog = self.selection.catalog();

        let product_cards = catalog
            .products()
            .iter()
            .map(|p| {
                card(
                    p,
                    self.selection.is_product_selected(&p.id),
                    &self.images,
                    Message::SelectProduct(p.id.clone()),
                )
            })
            .collect();

        let style_cards = catalog
            .styles()
            .iter()
            .map(|s| {
                card(
                    s,
                    self.selection.is_style_selected(&s.id),
                    &self.images,
                    Message::SelectStyle(s.id.clone()),
                )
            })
            .collect();

        let processing = self.selection.is_processing();
        let apply_label = if processing {
            "Processing..."
        } else {
            "Apply Style Transfer"
        };
        let apply = button(text(apply_label).width(Length::Fill).center())
            .on_press_maybe((!processing).then_some(Message::ApplyTransfer))
            .width(Length::Fill)
            .padding(10);

        let demo = row![
            column![text("Select Product").size(18), grid(product_cards)].spacing(16),
            column![text("Select Style").size(18), grid(style_cards), apply]
                .spacing(16)
                .width(Length::Fixed(grid_width())),
            ui::result::result_panel(
                &self.selection,
                &self.images,
                self.spinner_phase,
                &self.status,
            ),
        ]
        .spacing(32);

        let content: Column<Message> = column![
            ui::chrome::header(),
            horizontal_rule(1),
            text("Style Transfer Demo").size(22),
            demo,
            horizontal_rule(1),
            ui::chrome::about(),
            horizontal_rule(1),
            ui::chrome::footer(),
        ]
        .spacing(24)
        .padding(32)
        .max_width(1200.0);

        scrollable(container(content).center_x(Length::Fill)).into()
    }

    /// Animate the spinner only while a transfer is pending
    fn subscription(&self) -> Subscription<Message> {
        if self.selection.is_processing() {
            time::every(Duration::from_millis(16)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        match self.config.theme {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

/// Width of a two-card-wide grid
fn grid_width() -> f32 {
    CARD_SIZE * 2.0 + GRID_SPACING
}

fn grid(cards: Vec<Element<'_, Message>>) -> Element<'_, Message> {
    container(
        Wrap::with_elements(cards)
            .spacing(GRID_SPACING)
            .line_spacing(GRID_SPACING),
    )
    .width(Length::Fixed(grid_width()))
    .into()
}

fn configure_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("styleshift=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<(), AppError> {
    configure_logging();

    let config = AppConfig::load();
    let catalog = Catalog::builtin()?;
    let client = loader::build_client()?;

    iced::application("StyleShift", StyleShift::update, StyleShift::view)
        .theme(StyleShift::theme)
        .subscription(StyleShift::subscription)
        .window_size((1280.0, 900.0))
        .centered()
        .run_with(move || StyleShift::new(catalog, config, client))?;

    Ok(())
}
