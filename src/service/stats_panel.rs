use tracing::{error, info};

use crate::api::ChatApi;
use crate::errors::ChatError;
use crate::models::CourseStats;

pub const NO_COURSES: &str = "No courses available";
pub const LOAD_FAILED: &str = "Failed to load courses";

/// Course statistics widget. Failures stay inside the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatsPanel {
    #[default]
    Loading,
    Loaded(CourseStats),
    Failed(ChatError),
}

/// Placeholder shown instead of the title list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsNotice {
    Loading,
    NoCourses,
    Error,
}

impl StatsNotice {
    pub fn text(&self) -> &'static str {
        match self {
            StatsNotice::Loading => "Loading...",
            StatsNotice::NoCourses => NO_COURSES,
            StatsNotice::Error => LOAD_FAILED,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatsNotice::Loading => "loading-courses",
            StatsNotice::NoCourses => "no-courses",
            StatsNotice::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub total: String,
    pub titles: Vec<String>,
    pub notice: Option<StatsNotice>,
}

impl StatsPanel {
    pub async fn load<A: ChatApi>(api: &A) -> Self {
        Self::from_result(api.course_stats().await)
    }

    pub fn from_result(result: Result<CourseStats, ChatError>) -> Self {
        match result {
            Ok(stats) => {
                info!(total = stats.total_courses, "Course stats loaded");
                StatsPanel::Loaded(stats)
            }
            Err(e) => {
                error!("Error loading course stats: {e}");
                StatsPanel::Failed(e)
            }
        }
    }

    pub fn view(&self) -> StatsView {
        match self {
            StatsPanel::Loading => StatsView {
                total: "-".to_string(),
                titles: Vec::new(),
                notice: Some(StatsNotice::Loading),
            },
            StatsPanel::Loaded(stats) => StatsView {
                total: stats.total_courses.to_string(),
                titles: stats.course_titles.clone(),
                notice: stats.course_titles.is_empty().then_some(StatsNotice::NoCourses),
            },
            StatsPanel::Failed(_) => StatsView {
                total: "0".to_string(),
                titles: Vec::new(),
                notice: Some(StatsNotice::Error),
            },
        }
    }
}
