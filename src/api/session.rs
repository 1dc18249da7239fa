use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use numlet_session::{ConverterSession, ShareError};
use tracing::debug_span;

use super::types::convert_to_events;
use super::{NumletResponse, NumletResultLine};

/// FFI wrapper around `ConverterSession`. One per converter screen.
#[derive(uniffi::Object)]
pub struct NumletSession {
    session: Mutex<ConverterSession>,
}

impl NumletSession {
    fn lock(&self) -> MutexGuard<'_, ConverterSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl NumletSession {
    #[uniffi::constructor]
    pub(super) fn new() -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(ConverterSession::new()),
        })
    }

    fn set_input(&self, text: String) -> NumletResponse {
        let _span = debug_span!("ffi_set_input").entered();
        convert_to_events(self.lock().set_input(&text))
    }

    fn clear(&self) -> NumletResponse {
        convert_to_events(self.lock().clear())
    }

    fn load_example(&self) -> NumletResponse {
        convert_to_events(self.lock().load_example())
    }

    fn copy_line(&self, index: u32) -> NumletResponse {
        convert_to_events(self.lock().copy_line(index as usize))
    }

    fn copy_all(&self) -> NumletResponse {
        convert_to_events(self.lock().copy_all())
    }

    fn copy_finished(&self, success: bool) -> NumletResponse {
        convert_to_events(self.lock().copy_finished(success))
    }

    fn share(&self) -> NumletResponse {
        convert_to_events(self.lock().share())
    }

    /// `error` is the platform's failure description, `None` on success.
    fn share_finished(&self, error: Option<String>) -> NumletResponse {
        let result = match error {
            None => Ok(()),
            Some(reason) => Err(ShareError::Unavailable { reason }),
        };
        convert_to_events(self.lock().share_finished(result))
    }

    fn notice_expired(&self, generation: u64) -> NumletResponse {
        convert_to_events(self.lock().notice_expired(generation))
    }

    fn input(&self) -> String {
        self.lock().input().to_string()
    }

    fn results(&self) -> Vec<NumletResultLine> {
        self.lock()
            .results()
            .iter()
            .map(NumletResultLine::from)
            .collect()
    }

    fn notice(&self) -> Option<String> {
        self.lock().notice().map(str::to_string)
    }

    fn legend(&self) -> String {
        self.lock().legend()
    }

    fn placeholder(&self) -> String {
        self.lock().placeholder().to_string()
    }
}
