use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult, SimpleObject};

use crate::modules::content_records::core::content_record::{
    ContentRecord, ContentType, RecordIdInput, TagsInput,
};
use crate::modules::content_records::use_cases::create_content_record::command::CreateContentRecord;
use crate::modules::content_records::use_cases::delete_content_record::handler::DeleteAcknowledgement;
use crate::modules::content_records::use_cases::update_content_record::command::UpdateContentRecord;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlContentRecord {
    pub id: ID,
    pub content_name: String,
    pub content_title: String,
    pub content_description: String,
    pub content_image: String,
    pub content_link: String,
    pub content_tags: Vec<String>,
    pub content_date_start: String,
    pub content_date_end: String,
    pub content_type: String,
    pub create_at: String,
    pub update_at: String,
    pub status: bool,
    pub content_subtitle: String,
}

impl From<ContentRecord> for GqlContentRecord {
    fn from(r: ContentRecord) -> Self {
        Self {
            id: ID(r.id),
            content_name: r.content_name,
            content_title: r.content_title,
            content_description: r.content_description,
            content_image: r.content_image,
            content_link: r.content_link,
            content_tags: r.content_tags,
            content_date_start: r.content_date_start,
            content_date_end: r.content_date_end,
            content_type: r.content_type.as_str().to_string(),
            create_at: r.create_at,
            update_at: r.update_at,
            status: r.status,
            content_subtitle: r.content_subtitle,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlDeleteAcknowledgement {
    pub success: bool,
    pub id: ID,
    pub message: String,
}

impl From<DeleteAcknowledgement> for GqlDeleteAcknowledgement {
    fn from(ack: DeleteAcknowledgement) -> Self {
        Self {
            success: ack.success,
            id: ID(ack.id),
            message: ack.message,
        }
    }
}

/// Field set shared by create and update. On update, omitted fields keep
/// their stored value.
#[derive(InputObject, Default)]
pub struct ContentRecordInput {
    pub content_name: Option<String>,
    pub content_title: Option<String>,
    pub content_description: Option<String>,
    pub content_image: Option<String>,
    pub content_link: Option<String>,
    pub content_tags: Option<Vec<String>>,
    pub content_date_start: Option<String>,
    pub content_date_end: Option<String>,
    pub content_type: Option<String>,
    pub content_subtitle: Option<String>,
}

fn parse_content_type(raw: Option<String>) -> GqlResult<Option<ContentType>> {
    raw.map(|value| value.parse::<ContentType>())
        .transpose()
        .map_err(|e| async_graphql::Error::new(e.to_string()))
}

impl ContentRecordInput {
    fn into_create(self) -> GqlResult<CreateContentRecord> {
        Ok(CreateContentRecord {
            content_type: parse_content_type(self.content_type)?,
            content_name: self.content_name,
            content_title: self.content_title,
            content_description: self.content_description,
            content_image: self.content_image,
            content_link: self.content_link,
            content_tags: self.content_tags.map(TagsInput::List),
            content_date_start: self.content_date_start,
            content_date_end: self.content_date_end,
            content_subtitle: self.content_subtitle,
        })
    }

    fn into_update(self, id: ID) -> GqlResult<UpdateContentRecord> {
        Ok(UpdateContentRecord {
            id: Some(RecordIdInput::Text(id.0)),
            content_type: parse_content_type(self.content_type)?,
            content_name: self.content_name,
            content_title: self.content_title,
            content_description: self.content_description,
            content_image: self.content_image,
            content_link: self.content_link,
            content_tags: self.content_tags.map(TagsInput::List),
            content_date_start: self.content_date_start,
            content_date_end: self.content_date_end,
            content_subtitle: self.content_subtitle,
        })
    }
}

fn gql_error(e: impl std::fmt::Display) -> async_graphql::Error {
    async_graphql::Error::new(e.to_string())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Active records by default; pass `status: false` for soft-deleted ones.
    async fn content_records(
        &self,
        context: &Context<'_>,
        status: Option<bool>,
    ) -> GqlResult<Vec<GqlContentRecord>> {
        let state = context.data_unchecked::<AppState>();
        let records = state.list_records.handle(status).await.map_err(gql_error)?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_content_record(
        &self,
        context: &Context<'_>,
        input: ContentRecordInput,
    ) -> GqlResult<GqlContentRecord> {
        let state = context.data_unchecked::<AppState>();
        let record = state
            .create_record
            .handle(input.into_create()?)
            .await
            .map_err(gql_error)?;
        Ok(record.into())
    }

    async fn update_content_record(
        &self,
        context: &Context<'_>,
        id: ID,
        input: ContentRecordInput,
    ) -> GqlResult<GqlContentRecord> {
        let state = context.data_unchecked::<AppState>();
        let record = state
            .update_record
            .handle(input.into_update(id)?)
            .await
            .map_err(gql_error)?;
        Ok(record.into())
    }

    async fn delete_content_record(
        &self,
        context: &Context<'_>,
        id: ID,
    ) -> GqlResult<GqlDeleteAcknowledgement> {
        let state = context.data_unchecked::<AppState>();
        let ack = state
            .delete_record
            .handle(Some(id.as_str()))
            .await
            .map_err(gql_error)?;
        Ok(ack.into())
    }
}
