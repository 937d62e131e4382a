use crate::core::models::nuclide::Nuclide;

#[derive(Debug, Clone)]
pub enum Progress {
    ScanStart { name: &'static str, total_pairs: u64 },
    PairEvaluated,
    PairSkipped { z: i64, n: i64, reason: String },
    Match { nuclide: Nuclide, score: f64 },
    ScanFinish { matches: usize },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
