use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, WatchHistoryEntryDto},
    error::ApplicationResult,
};

impl UserQueryService {
    /// The caller's watch history in viewing order, duplicates preserved,
    /// each video carrying its owner's public sub-record. An account that
    /// has watched nothing yields an empty list, not an error.
    pub async fn get_watch_history(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<WatchHistoryEntryDto>> {
        let entries = self.video_repo.watch_history_for(actor.id).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
