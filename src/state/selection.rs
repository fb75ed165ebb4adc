use tracing::debug;

use super::catalog::Catalog;
use super::data::{Product, Style};
use super::transfer::{TransferJob, TransferReceipt};

/// What the result panel should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplaySource<'a> {
    /// A transfer is in progress
    Placeholder,
    /// The selected product's pre-rendered image for the selected style
    Remote(&'a str),
    /// The catalog has no image for this pair; renders as a broken image
    Missing,
}

/// Current product/style selection and the processing flag.
///
/// Selections are stored as catalog positions, so they always point at a
/// real entry. Both default to the first entry of their list.
#[derive(Debug, Clone)]
pub struct Selection {
    catalog: Catalog,
    product: usize,
    style: usize,
    processing: bool,
    next_job_id: u64,
}

impl Selection {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            product: 0,
            style: 0,
            processing: false,
            next_job_id: 1,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn product(&self) -> &Product {
        &self.catalog.products()[self.product]
    }

    pub fn style(&self) -> &Style {
        &self.catalog.styles()[self.style]
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn is_product_selected(&self, id: &str) -> bool {
        self.product().id == id
    }

    pub fn is_style_selected(&self, id: &str) -> bool {
        self.style().id == id
    }

    /// Replace the selected product. Returns true if the selection changed.
    pub fn select_product(&mut self, id: &str) -> bool {
        match self.catalog.product_position(id) {
            Some(position) if position != self.product => {
                self.product = position;
                true
            }
            Some(_) => false,
            None => {
                debug!("Ignoring unknown product id '{}'", id);
                false
            }
        }
    }

    /// Replace the selected style. Returns true if the selection changed.
    pub fn select_style(&mut self, id: &str) -> bool {
        match self.catalog.style_position(id) {
            Some(position) if position != self.style => {
                self.style = position;
                true
            }
            Some(_) => false,
            None => {
                debug!("Ignoring unknown style id '{}'", id);
                false
            }
        }
    }

    /// Enter the processing state and describe the job to wait out.
    ///
    /// Calling this while already processing starts another job; the
    /// disabled Apply button is the only thing that prevents it.
    pub fn apply_transfer(&mut self) -> TransferJob {
        self.processing = true;
        let job = TransferJob::new(self.next_job_id, &self.product().id, &self.style().id);
        self.next_job_id += 1;
        job
    }

    /// Leave the processing state once a job's delay has elapsed.
    ///
    /// Any finished job clears the flag, even if a later one is still pending.
    pub fn finish_transfer(&mut self, job: TransferJob) -> TransferReceipt {
        self.processing = false;
        let image_url = self
            .catalog
            .product(&job.product_id)
            .and_then(|p| p.styled_image(&job.style_id))
            .map(str::to_owned);
        job.complete(image_url)
    }

    pub fn display_source(&self) -> DisplaySource<'_> {
        if self.processing {
            return DisplaySource::Placeholder;
        }
        match self.product().styled_image(&self.style().id) {
            Some(uri) => DisplaySource::Remote(uri),
            None => DisplaySource::Missing,
        }
    }

    /// Alt text for the result image
    pub fn caption(&self) -> String {
        format!("{} in {} style", self.product().name, self.style().name)
    }
}
