//! Submission side of u508: form interception, upload and result dispatch.

use std::cell::{Cell, RefCell};

use contracts::usecases::u508_csv_chart_upload::FILE_FIELD;

use super::model::{RawResponse, TransportError, UploadResult, NO_FILE_SELECTED_MESSAGE};
use super::presentation::{PresentationManager, Surface};
use crate::shared::chart::{ChartEngine, ChartError};

/// One file payload and the multipart field it travels under
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest<F> {
    pub field_name: &'static str,
    pub file: F,
}

impl<F> UploadRequest<F> {
    pub fn new(file: F) -> Self {
        Self {
            field_name: FILE_FIELD,
            file,
        }
    }
}

/// Sends an upload and returns whatever the server answered
#[allow(async_fn_in_trait)]
pub trait UploadTransport {
    type File;

    async fn send(&self, request: UploadRequest<Self::File>) -> Result<RawResponse, TransportError>;
}

/// Submission accepted by [`SubmissionController::start`], waiting to be sent
pub struct PendingUpload<F> {
    generation: u64,
    request: UploadRequest<F>,
}

/// Drives one submission cycle at a time.
///
/// Every call to [`start`](Self::start) bumps a generation counter; a reply that
/// settles after a newer submission began is dropped instead of applied.
pub struct SubmissionController<T: UploadTransport, E: ChartEngine, S: Surface> {
    transport: T,
    presenter: RefCell<PresentationManager<E, S>>,
    generation: Cell<u64>,
}

impl<T: UploadTransport, E: ChartEngine, S: Surface> SubmissionController<T, E, S> {
    pub fn new(transport: T, presenter: PresentationManager<E, S>) -> Self {
        Self {
            transport,
            presenter: RefCell::new(presenter),
            generation: Cell::new(0),
        }
    }

    pub fn presenter(&self) -> std::cell::Ref<'_, PresentationManager<E, S>> {
        self.presenter.borrow()
    }

    /// Synchronous half of a submit: clears the previous result and builds the
    /// request. Returns `None` when no file was chosen; the user is told so and
    /// nothing is sent.
    pub fn start(&self, file: Option<T::File>) -> Option<PendingUpload<T::File>> {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let mut presenter = self.presenter.borrow_mut();
        presenter.reset();

        match file {
            Some(file) => Some(PendingUpload {
                generation,
                request: UploadRequest::new(file),
            }),
            None => {
                presenter.show_error(NO_FILE_SELECTED_MESSAGE);
                None
            }
        }
    }

    /// Asynchronous half: sends the request and hands the classified reply to
    /// the presentation manager. Chart engine errors are returned, not handled.
    pub async fn complete(&self, pending: PendingUpload<T::File>) -> Result<(), ChartError> {
        let PendingUpload {
            generation,
            request,
        } = pending;

        let settled = self.transport.send(request).await;

        if generation != self.generation.get() {
            log::debug!(
                "Dropping reply of superseded upload #{} (current #{})",
                generation,
                self.generation.get()
            );
            return Ok(());
        }

        let result = match settled {
            Ok(response) => UploadResult::classify(&response),
            Err(err) => UploadResult::TransportError(err),
        };

        self.presenter.borrow_mut().apply(result)
    }

    /// Destroys the chart widget, e.g. when the page is unmounted
    pub fn release_chart(&self) {
        self.presenter.borrow_mut().destroy_chart_if_present();
    }
}
