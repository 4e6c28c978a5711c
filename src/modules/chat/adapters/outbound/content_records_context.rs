// Portfolio context built from the live content records.
//
// Active records are grouped by content type, in the order types first appear,
// so the model sees one section per kind of content.

use crate::modules::chat::core::ports::PortfolioContextSource;
use crate::modules::content_records::core::content_record::ContentRecord;
use crate::modules::content_records::use_cases::list_content_records::handler::ListContentRecordsHandler;
use anyhow::Context;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;

pub struct ActiveRecordsContext {
    records: Arc<ListContentRecordsHandler>,
}

impl ActiveRecordsContext {
    pub fn new(records: Arc<ListContentRecordsHandler>) -> Self {
        Self { records }
    }
}

pub fn group_into_sections(records: &[ContentRecord]) -> Value {
    let mut sections: Vec<(&str, Vec<&ContentRecord>)> = Vec::new();
    for record in records {
        let section_id = record.content_type.as_str();
        match sections.iter_mut().find(|(id, _)| *id == section_id) {
            Some((_, members)) => members.push(record),
            None => sections.push((section_id, vec![record])),
        }
    }

    json!({
        "sections": sections
            .into_iter()
            .map(|(section_id, records)| json!({ "section_id": section_id, "records": records }))
            .collect::<Vec<_>>()
    })
}

#[async_trait]
impl PortfolioContextSource for ActiveRecordsContext {
    async fn load(&self) -> anyhow::Result<Value> {
        let records = self
            .records
            .handle(Some(true))
            .await
            .context("listing active content records")?;
        Ok(group_into_sections(&records))
    }
}
