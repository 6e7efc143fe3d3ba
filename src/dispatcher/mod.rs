// Generic RPC dispatcher consumed by the facade.
//
// One method per backend operation, grouped by the domain service that owns
// the resource. The concrete implementation (message bus, HTTP, in-process
// test double) lives outside this crate; the facade only depends on this
// trait object.

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

use crate::filter::FilterValue;
use crate::models::address::Address;
use crate::models::{
    ai, ai_message, aicall, call, conference, file, outdial, outdialtarget, recording, summary,
    tag, transcribe, transcript,
};

/// Failure reported by a backend call. The facade wraps these with the
/// operation name but never reclassifies them.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("resource not found")]
    NotFound,

    #[error("request canceled")]
    Canceled,

    #[error("backend responded with status {code}: {message}")]
    Response { code: u16, message: String },

    #[error("transport failure: {0}")]
    Transport(String),
}

/// Typed call surface of the downstream domain services.
///
/// Implementations are stateless and safe for concurrent use; the facade
/// shares one instance across all in-flight requests. `request_timeout`
/// parameters are per-call millisecond caps forwarded to the backend.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    // ai-manager: ai
    #[allow(clippy::too_many_arguments)]
    async fn ai_v1_ai_create(
        &self,
        customer_id: Uuid,
        name: &str,
        detail: &str,
        engine_type: ai::EngineType,
        engine_model: &str,
        engine_key: &str,
        init_prompt: &str,
    ) -> Result<ai::Ai, BackendError>;
    async fn ai_v1_ai_get(&self, ai_id: Uuid) -> Result<ai::Ai, BackendError>;
    async fn ai_v1_ai_list(
        &self,
        page_token: &str,
        page_size: u64,
        filters: HashMap<ai::Field, FilterValue>,
    ) -> Result<Vec<ai::Ai>, BackendError>;
    #[allow(clippy::too_many_arguments)]
    async fn ai_v1_ai_update(
        &self,
        ai_id: Uuid,
        name: &str,
        detail: &str,
        engine_type: ai::EngineType,
        engine_model: &str,
        engine_key: &str,
        init_prompt: &str,
    ) -> Result<ai::Ai, BackendError>;
    async fn ai_v1_ai_delete(&self, ai_id: Uuid) -> Result<ai::Ai, BackendError>;

    // ai-manager: aicall
    async fn ai_v1_aicall_start(
        &self,
        activeflow_id: Uuid,
        ai_id: Uuid,
        reference_type: aicall::ReferenceType,
        reference_id: Uuid,
        gender: aicall::Gender,
        language: &str,
    ) -> Result<aicall::Aicall, BackendError>;
    async fn ai_v1_aicall_get(&self, aicall_id: Uuid) -> Result<aicall::Aicall, BackendError>;
    async fn ai_v1_aicall_list(
        &self,
        page_token: &str,
        page_size: u64,
        filters: HashMap<aicall::Field, FilterValue>,
    ) -> Result<Vec<aicall::Aicall>, BackendError>;
    async fn ai_v1_aicall_delete(&self, aicall_id: Uuid) -> Result<aicall::Aicall, BackendError>;

    // ai-manager: message
    async fn ai_v1_message_send(
        &self,
        aicall_id: Uuid,
        role: ai_message::Role,
        content: &str,
        run_immediately: bool,
        request_timeout: i32,
    ) -> Result<ai_message::AiMessage, BackendError>;
    async fn ai_v1_message_list_by_aicall_id(
        &self,
        aicall_id: Uuid,
        page_token: &str,
        page_size: u64,
        filters: HashMap<ai_message::Field, FilterValue>,
    ) -> Result<Vec<ai_message::AiMessage>, BackendError>;

    // ai-manager: summary
    #[allow(clippy::too_many_arguments)]
    async fn ai_v1_summary_create(
        &self,
        customer_id: Uuid,
        activeflow_id: Uuid,
        on_end_flow_id: Uuid,
        reference_type: summary::ReferenceType,
        reference_id: Uuid,
        language: &str,
        request_timeout: i32,
    ) -> Result<summary::Summary, BackendError>;
    async fn ai_v1_summary_get(&self, summary_id: Uuid) -> Result<summary::Summary, BackendError>;
    async fn ai_v1_summary_list(
        &self,
        page_token: &str,
        page_size: u64,
        filters: HashMap<summary::Field, FilterValue>,
    ) -> Result<Vec<summary::Summary>, BackendError>;
    async fn ai_v1_summary_delete(
        &self,
        summary_id: Uuid,
    ) -> Result<summary::Summary, BackendError>;

    // call-manager: call (ownership resolution only)
    async fn call_v1_call_get(&self, call_id: Uuid) -> Result<call::Call, BackendError>;

    // call-manager: recording
    async fn call_v1_recording_get(
        &self,
        recording_id: Uuid,
    ) -> Result<recording::Recording, BackendError>;
    async fn call_v1_recording_list(
        &self,
        page_token: &str,
        page_size: u64,
        filters: HashMap<recording::Field, FilterValue>,
    ) -> Result<Vec<recording::Recording>, BackendError>;
    async fn call_v1_recording_delete(
        &self,
        recording_id: Uuid,
    ) -> Result<recording::Recording, BackendError>;

    // conference-manager
    #[allow(clippy::too_many_arguments)]
    async fn conference_v1_conference_create(
        &self,
        customer_id: Uuid,
        conference_type: conference::Type,
        name: &str,
        detail: &str,
        data: HashMap<String, serde_json::Value>,
        timeout: i32,
        pre_flow_id: Uuid,
        post_flow_id: Uuid,
    ) -> Result<conference::Conference, BackendError>;
    async fn conference_v1_conference_get(
        &self,
        conference_id: Uuid,
    ) -> Result<conference::Conference, BackendError>;
    async fn conference_v1_conference_list(
        &self,
        page_token: &str,
        page_size: u64,
        filters: HashMap<conference::Field, FilterValue>,
    ) -> Result<Vec<conference::Conference>, BackendError>;
    #[allow(clippy::too_many_arguments)]
    async fn conference_v1_conference_update(
        &self,
        conference_id: Uuid,
        name: &str,
        detail: &str,
        data: HashMap<String, serde_json::Value>,
        timeout: i32,
        pre_flow_id: Uuid,
        post_flow_id: Uuid,
    ) -> Result<conference::Conference, BackendError>;
    async fn conference_v1_conference_delete(
        &self,
        conference_id: Uuid,
    ) -> Result<conference::Conference, BackendError>;
    async fn conference_v1_conference_recording_start(
        &self,
        conference_id: Uuid,
        format: recording::Format,
    ) -> Result<conference::Conference, BackendError>;
    async fn conference_v1_conference_recording_stop(
        &self,
        conference_id: Uuid,
    ) -> Result<conference::Conference, BackendError>;
    async fn conference_v1_conference_transcribe_start(
        &self,
        conference_id: Uuid,
        language: &str,
    ) -> Result<conference::Conference, BackendError>;
    async fn conference_v1_conference_transcribe_stop(
        &self,
        conference_id: Uuid,
    ) -> Result<conference::Conference, BackendError>;

    // outdial-manager: outdial
    async fn outdial_v1_outdial_create(
        &self,
        customer_id: Uuid,
        campaign_id: Uuid,
        name: &str,
        detail: &str,
        data: &str,
    ) -> Result<outdial::Outdial, BackendError>;
    async fn outdial_v1_outdial_get(
        &self,
        outdial_id: Uuid,
    ) -> Result<outdial::Outdial, BackendError>;
    async fn outdial_v1_outdial_list(
        &self,
        page_token: &str,
        page_size: u64,
        filters: HashMap<outdial::Field, FilterValue>,
    ) -> Result<Vec<outdial::Outdial>, BackendError>;
    async fn outdial_v1_outdial_delete(
        &self,
        outdial_id: Uuid,
    ) -> Result<outdial::Outdial, BackendError>;
    async fn outdial_v1_outdial_update_basic_info(
        &self,
        outdial_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<outdial::Outdial, BackendError>;
    async fn outdial_v1_outdial_update_campaign_id(
        &self,
        outdial_id: Uuid,
        campaign_id: Uuid,
    ) -> Result<outdial::Outdial, BackendError>;
    async fn outdial_v1_outdial_update_data(
        &self,
        outdial_id: Uuid,
        data: &str,
    ) -> Result<outdial::Outdial, BackendError>;

    // outdial-manager: outdialtarget
    async fn outdial_v1_outdialtarget_create(
        &self,
        outdial_id: Uuid,
        name: &str,
        detail: &str,
        data: &str,
        destinations: &[Address],
    ) -> Result<outdialtarget::OutdialTarget, BackendError>;
    async fn outdial_v1_outdialtarget_get(
        &self,
        outdialtarget_id: Uuid,
    ) -> Result<outdialtarget::OutdialTarget, BackendError>;
    async fn outdial_v1_outdialtarget_list_by_outdial_id(
        &self,
        outdial_id: Uuid,
        page_token: &str,
        page_size: u64,
    ) -> Result<Vec<outdialtarget::OutdialTarget>, BackendError>;
    async fn outdial_v1_outdialtarget_delete(
        &self,
        outdialtarget_id: Uuid,
    ) -> Result<outdialtarget::OutdialTarget, BackendError>;

    // storage-manager: file
    #[allow(clippy::too_many_arguments)]
    async fn storage_v1_file_create(
        &self,
        customer_id: Uuid,
        owner_id: Uuid,
        name: &str,
        detail: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<file::File, BackendError>;
    async fn storage_v1_file_get(&self, file_id: Uuid) -> Result<file::File, BackendError>;
    async fn storage_v1_file_list(
        &self,
        page_token: &str,
        page_size: u64,
        filters: HashMap<file::Field, FilterValue>,
    ) -> Result<Vec<file::File>, BackendError>;
    async fn storage_v1_file_delete(
        &self,
        file_id: Uuid,
        request_timeout: i32,
    ) -> Result<file::File, BackendError>;

    // tag-manager
    async fn tag_v1_tag_create(
        &self,
        customer_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<tag::Tag, BackendError>;
    async fn tag_v1_tag_get(&self, tag_id: Uuid) -> Result<tag::Tag, BackendError>;
    async fn tag_v1_tag_list(
        &self,
        page_token: &str,
        page_size: u64,
        filters: HashMap<tag::Field, FilterValue>,
    ) -> Result<Vec<tag::Tag>, BackendError>;
    async fn tag_v1_tag_update(
        &self,
        tag_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<tag::Tag, BackendError>;
    async fn tag_v1_tag_delete(&self, tag_id: Uuid) -> Result<tag::Tag, BackendError>;

    // transcribe-manager: transcribe
    #[allow(clippy::too_many_arguments)]
    async fn transcribe_v1_transcribe_start(
        &self,
        customer_id: Uuid,
        activeflow_id: Uuid,
        on_end_flow_id: Uuid,
        reference_type: transcribe::ReferenceType,
        reference_id: Uuid,
        language: &str,
        direction: transcribe::Direction,
    ) -> Result<transcribe::Transcribe, BackendError>;
    async fn transcribe_v1_transcribe_get(
        &self,
        transcribe_id: Uuid,
    ) -> Result<transcribe::Transcribe, BackendError>;
    async fn transcribe_v1_transcribe_list(
        &self,
        page_token: &str,
        page_size: u64,
        filters: HashMap<transcribe::Field, FilterValue>,
    ) -> Result<Vec<transcribe::Transcribe>, BackendError>;
    async fn transcribe_v1_transcribe_stop(
        &self,
        transcribe_id: Uuid,
    ) -> Result<transcribe::Transcribe, BackendError>;
    async fn transcribe_v1_transcribe_delete(
        &self,
        transcribe_id: Uuid,
    ) -> Result<transcribe::Transcribe, BackendError>;

    // transcribe-manager: transcript
    async fn transcribe_v1_transcript_list(
        &self,
        page_token: &str,
        page_size: u64,
        filters: HashMap<transcript::Field, FilterValue>,
    ) -> Result<Vec<transcript::Transcript>, BackendError>;
}
