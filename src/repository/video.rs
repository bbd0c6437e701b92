use chrono::Utc;
use diesel::dsl::exists;
use diesel::prelude::*;

use crate::domain::types::{CategoryId, VideoId};
use crate::domain::video::{CategorizedVideo, NewVideo, Video, VideoPatch};
use crate::models::video::{
    CategorizedVideo as DbCategorizedVideo, NewVideo as DbNewVideo, Video as DbVideo,
    VideoChangeset,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, VideoReader, VideoWriter};

impl VideoReader for DieselRepository {
    fn list_active_videos(&self) -> RepositoryResult<Vec<Video>> {
        use crate::schema::videos;

        let mut conn = self.conn()?;

        let items = videos::table
            .filter(videos::is_active.eq(true))
            .order(videos::title.asc())
            .load::<DbVideo>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Video>, _>>()?;

        Ok(items)
    }

    fn get_video_by_id(&self, id: VideoId) -> RepositoryResult<Option<Video>> {
        use crate::schema::videos;

        let mut conn = self.conn()?;

        let video = videos::table
            .filter(videos::id.eq(id.get()))
            .first::<DbVideo>(&mut conn)
            .optional()?;

        let video = video.map(TryInto::try_into).transpose()?;
        Ok(video)
    }

    fn video_is_active(&self, id: VideoId) -> RepositoryResult<bool> {
        use crate::schema::videos;

        let mut conn = self.conn()?;

        let found = diesel::select(exists(
            videos::table
                .filter(videos::id.eq(id.get()))
                .filter(videos::is_active.eq(true)),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    fn count_active_videos_in_category(&self, category_id: CategoryId) -> RepositoryResult<i64> {
        use crate::schema::videos;

        let mut conn = self.conn()?;

        let count = videos::table
            .filter(videos::category_id.eq(category_id.get()))
            .filter(videos::is_active.eq(true))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(count)
    }

    fn list_categorized_videos(&self) -> RepositoryResult<Vec<CategorizedVideo>> {
        use crate::schema::{categories, videos};

        let mut conn = self.conn()?;

        let rows = videos::table
            .inner_join(categories::table)
            .filter(videos::is_active.eq(true))
            .order((categories::name.asc(), videos::title.asc()))
            .select((
                videos::id,
                categories::name,
                videos::title,
                videos::youtube_code,
            ))
            .load::<DbCategorizedVideo>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<CategorizedVideo>, _>>()?;

        Ok(rows)
    }
}

impl VideoWriter for DieselRepository {
    fn create_video(&self, video: &NewVideo) -> RepositoryResult<Video> {
        use crate::schema::videos;

        let mut conn = self.conn()?;
        let db_video: DbNewVideo = video.clone().into();

        let created = diesel::insert_into(videos::table)
            .values(db_video)
            .get_result::<DbVideo>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_video(&self, id: VideoId, patch: &VideoPatch) -> RepositoryResult<Video> {
        use crate::schema::videos;

        let mut conn = self.conn()?;
        let changeset = VideoChangeset::from_patch(patch.clone(), Utc::now().naive_utc());

        let updated = diesel::update(videos::table.filter(videos::id.eq(id.get())))
            .set(changeset)
            .get_result::<DbVideo>(&mut conn)?;

        Ok(updated.try_into()?)
    }

    fn set_video_active(&self, id: VideoId, is_active: bool) -> RepositoryResult<usize> {
        use crate::schema::videos;

        let mut conn = self.conn()?;

        let affected = diesel::update(videos::table.filter(videos::id.eq(id.get())))
            .set((
                videos::is_active.eq(is_active),
                videos::date_last_changed.eq(Utc::now().naive_utc()),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
