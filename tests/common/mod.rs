#![allow(dead_code)]

// Shared test harness: an in-process backend double plus fixture builders.
//
// The mock records every RPC it receives so tests can assert not just on
// results but on which backend calls were (or were not) issued.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use commlink_api::dispatcher::{BackendError, RequestHandler};
use commlink_api::filter::FilterValue;
use commlink_api::handlers::ServiceHandler;
use commlink_api::identity::{Agent, Permission};
use commlink_api::models::address::Address;
use commlink_api::models::{
    ai, ai_message, aicall, call, conference, file, outdial, outdialtarget, recording, summary,
    tag, transcribe, transcript, Identity, TIMESTAMP_ACTIVE,
};
use commlink_api::util::Clock;

pub const FIXED_TOKEN: &str = "2024-05-01 00:00:00.000000";
pub const TM_CREATE: &str = "2024-01-10 08:00:00.000000";
pub const TM_DELETED: &str = "2024-02-01 12:30:00.000000";

/// Deterministic clock so the empty-page-token default is assertable.
pub struct FixedClock;

impl Clock for FixedClock {
    fn now_token(&self) -> String {
        FIXED_TOKEN.to_string()
    }
}

pub fn agent(customer_id: Uuid, permission: Permission) -> Agent {
    Agent {
        id: Uuid::new_v4(),
        customer_id,
        username: "test@example.com".to_string(),
        permission,
    }
}

pub fn handler(backend: Arc<MockBackend>) -> ServiceHandler {
    // RUST_LOG controls test log output; repeated init attempts are fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    ServiceHandler::with_clock(backend, Arc::new(FixedClock))
}

// Fixture builders. All records start active; flip `tm_delete` to
// TM_DELETED to simulate a soft-deleted row.

fn identity(customer_id: Uuid) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        customer_id,
    }
}

pub fn make_tag(customer_id: Uuid) -> tag::Tag {
    tag::Tag {
        identity: identity(customer_id),
        name: "vip".to_string(),
        detail: "priority customers".to_string(),
        tm_create: TM_CREATE.to_string(),
        tm_update: TM_CREATE.to_string(),
        tm_delete: TIMESTAMP_ACTIVE.to_string(),
    }
}

pub fn make_ai(customer_id: Uuid) -> ai::Ai {
    ai::Ai {
        identity: identity(customer_id),
        name: "frontdesk".to_string(),
        detail: "inbound reception agent".to_string(),
        engine_type: ai::EngineType::Openai,
        engine_model: "gpt-4o".to_string(),
        engine_key: "sk-secret".to_string(),
        init_prompt: "You are a receptionist.".to_string(),
        tm_create: TM_CREATE.to_string(),
        tm_update: TM_CREATE.to_string(),
        tm_delete: TIMESTAMP_ACTIVE.to_string(),
    }
}

pub fn make_aicall(customer_id: Uuid, ai_id: Uuid) -> aicall::Aicall {
    aicall::Aicall {
        identity: identity(customer_id),
        ai_id,
        activeflow_id: Uuid::new_v4(),
        reference_type: aicall::ReferenceType::Call,
        reference_id: Uuid::new_v4(),
        status: aicall::Status::Progressing,
        gender: aicall::Gender::Neutral,
        language: "en-US".to_string(),
        pipeline_id: Uuid::new_v4(),
        tm_create: TM_CREATE.to_string(),
        tm_update: TM_CREATE.to_string(),
        tm_delete: TIMESTAMP_ACTIVE.to_string(),
    }
}

pub fn make_ai_message(customer_id: Uuid, aicall_id: Uuid) -> ai_message::AiMessage {
    ai_message::AiMessage {
        identity: identity(customer_id),
        aicall_id,
        role: ai_message::Role::Assistant,
        content: "How can I help you?".to_string(),
        tm_create: TM_CREATE.to_string(),
        tm_update: TM_CREATE.to_string(),
        tm_delete: TIMESTAMP_ACTIVE.to_string(),
    }
}

pub fn make_call(customer_id: Uuid) -> call::Call {
    call::Call {
        identity: identity(customer_id),
        status: call::Status::Progressing,
        tm_create: TM_CREATE.to_string(),
        tm_update: TM_CREATE.to_string(),
        tm_delete: TIMESTAMP_ACTIVE.to_string(),
    }
}

pub fn make_conference(customer_id: Uuid) -> conference::Conference {
    conference::Conference {
        identity: identity(customer_id),
        conference_type: conference::Type::Conference,
        status: conference::Status::Progressing,
        name: "weekly sync".to_string(),
        detail: "team standup room".to_string(),
        data: HashMap::new(),
        timeout: 0,
        pre_flow_id: Uuid::nil(),
        post_flow_id: Uuid::nil(),
        confbridge_id: Uuid::new_v4(),
        recording_id: Uuid::nil(),
        recording_ids: Vec::new(),
        transcribe_id: Uuid::nil(),
        tm_create: TM_CREATE.to_string(),
        tm_update: TM_CREATE.to_string(),
        tm_delete: TIMESTAMP_ACTIVE.to_string(),
    }
}

pub fn make_recording(customer_id: Uuid) -> recording::Recording {
    recording::Recording {
        identity: identity(customer_id),
        reference_type: recording::ReferenceType::Call,
        reference_id: Uuid::new_v4(),
        status: recording::Status::Stopped,
        format: recording::Format::Wav,
        filenames: vec!["rec.wav".to_string()],
        tm_start: TM_CREATE.to_string(),
        tm_end: TM_CREATE.to_string(),
        tm_create: TM_CREATE.to_string(),
        tm_update: TM_CREATE.to_string(),
        tm_delete: TIMESTAMP_ACTIVE.to_string(),
    }
}

pub fn make_summary(customer_id: Uuid) -> summary::Summary {
    summary::Summary {
        identity: identity(customer_id),
        activeflow_id: Uuid::new_v4(),
        on_end_flow_id: Uuid::nil(),
        reference_type: summary::ReferenceType::Call,
        reference_id: Uuid::new_v4(),
        status: summary::Status::Done,
        language: "en-US".to_string(),
        content: "The caller asked about billing.".to_string(),
        tm_create: TM_CREATE.to_string(),
        tm_update: TM_CREATE.to_string(),
        tm_delete: TIMESTAMP_ACTIVE.to_string(),
    }
}

pub fn make_outdial(customer_id: Uuid) -> outdial::Outdial {
    outdial::Outdial {
        identity: identity(customer_id),
        campaign_id: Uuid::new_v4(),
        name: "spring campaign".to_string(),
        detail: "renewal reminders".to_string(),
        data: "".to_string(),
        tm_create: TM_CREATE.to_string(),
        tm_update: TM_CREATE.to_string(),
        tm_delete: TIMESTAMP_ACTIVE.to_string(),
    }
}

pub fn make_outdialtarget(outdial_id: Uuid) -> outdialtarget::OutdialTarget {
    outdialtarget::OutdialTarget {
        id: Uuid::new_v4(),
        outdial_id,
        name: "lead-42".to_string(),
        detail: "".to_string(),
        data: "".to_string(),
        status: outdialtarget::Status::Idle,
        destinations: vec![Address {
            address_type: commlink_api::models::address::Type::Tel,
            target: "+15551230042".to_string(),
            target_name: "".to_string(),
            name: "".to_string(),
            detail: "".to_string(),
        }],
        try_count: 0,
        tm_create: TM_CREATE.to_string(),
        tm_update: TM_CREATE.to_string(),
        tm_delete: TIMESTAMP_ACTIVE.to_string(),
    }
}

pub fn make_file(customer_id: Uuid, owner_id: Uuid) -> file::File {
    file::File {
        identity: identity(customer_id),
        owner_id,
        name: "greeting".to_string(),
        detail: "uploaded prompt audio".to_string(),
        filename: "greeting.wav".to_string(),
        filesize: 1024,
        bucket_name: "media-bucket".to_string(),
        filepath: "customer/greeting.wav".to_string(),
        download_uri: "https://files.example.com/greeting.wav".to_string(),
        tm_create: TM_CREATE.to_string(),
        tm_update: TM_CREATE.to_string(),
        tm_delete: TIMESTAMP_ACTIVE.to_string(),
    }
}

pub fn make_transcribe(customer_id: Uuid) -> transcribe::Transcribe {
    transcribe::Transcribe {
        identity: identity(customer_id),
        activeflow_id: Uuid::new_v4(),
        on_end_flow_id: Uuid::nil(),
        reference_type: transcribe::ReferenceType::Call,
        reference_id: Uuid::new_v4(),
        status: transcribe::Status::Done,
        language: "en-US".to_string(),
        direction: transcribe::Direction::Both,
        tm_create: TM_CREATE.to_string(),
        tm_update: TM_CREATE.to_string(),
        tm_delete: TIMESTAMP_ACTIVE.to_string(),
    }
}

pub fn make_transcript(customer_id: Uuid, transcribe_id: Uuid) -> transcript::Transcript {
    transcript::Transcript {
        identity: identity(customer_id),
        transcribe_id,
        direction: transcribe::Direction::In,
        message: "Hello, I have a question.".to_string(),
        tm_transcript: "00:00:03.200000".to_string(),
        tm_create: TM_CREATE.to_string(),
        tm_update: TM_CREATE.to_string(),
        tm_delete: TIMESTAMP_ACTIVE.to_string(),
    }
}

/// Backend double. Seeded with records before being handed to the facade;
/// records every invocation, the page tokens and filter maps passed to list
/// calls, and the per-call timeouts passed to the calls that carry one.
#[derive(Default)]
pub struct MockBackend {
    invocations: Mutex<Vec<&'static str>>,
    page_tokens: Mutex<Vec<String>>,
    filter_maps: Mutex<Vec<HashMap<String, FilterValue>>>,
    timeouts: Mutex<Vec<i32>>,

    ais: HashMap<Uuid, ai::Ai>,
    aicalls: HashMap<Uuid, aicall::Aicall>,
    ai_messages: Vec<ai_message::AiMessage>,
    summaries: HashMap<Uuid, summary::Summary>,
    calls: HashMap<Uuid, call::Call>,
    recordings: HashMap<Uuid, recording::Recording>,
    conferences: HashMap<Uuid, conference::Conference>,
    outdials: HashMap<Uuid, outdial::Outdial>,
    outdialtargets: HashMap<Uuid, outdialtarget::OutdialTarget>,
    files: HashMap<Uuid, file::File>,
    tags: HashMap<Uuid, tag::Tag>,
    transcribes: HashMap<Uuid, transcribe::Transcribe>,
    transcripts: Vec<transcript::Transcript>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ai(mut self, v: ai::Ai) -> Self {
        self.ais.insert(v.identity.id, v);
        self
    }

    pub fn with_aicall(mut self, v: aicall::Aicall) -> Self {
        self.aicalls.insert(v.identity.id, v);
        self
    }

    pub fn with_ai_message(mut self, v: ai_message::AiMessage) -> Self {
        self.ai_messages.push(v);
        self
    }

    pub fn with_summary(mut self, v: summary::Summary) -> Self {
        self.summaries.insert(v.identity.id, v);
        self
    }

    pub fn with_call(mut self, v: call::Call) -> Self {
        self.calls.insert(v.identity.id, v);
        self
    }

    pub fn with_recording(mut self, v: recording::Recording) -> Self {
        self.recordings.insert(v.identity.id, v);
        self
    }

    pub fn with_conference(mut self, v: conference::Conference) -> Self {
        self.conferences.insert(v.identity.id, v);
        self
    }

    pub fn with_outdial(mut self, v: outdial::Outdial) -> Self {
        self.outdials.insert(v.identity.id, v);
        self
    }

    pub fn with_outdialtarget(mut self, v: outdialtarget::OutdialTarget) -> Self {
        self.outdialtargets.insert(v.id, v);
        self
    }

    pub fn with_file(mut self, v: file::File) -> Self {
        self.files.insert(v.identity.id, v);
        self
    }

    pub fn with_tag(mut self, v: tag::Tag) -> Self {
        self.tags.insert(v.identity.id, v);
        self
    }

    pub fn with_transcribe(mut self, v: transcribe::Transcribe) -> Self {
        self.transcribes.insert(v.identity.id, v);
        self
    }

    pub fn with_transcript(mut self, v: transcript::Transcript) -> Self {
        self.transcripts.push(v);
        self
    }

    pub fn invoked(&self, name: &str) -> bool {
        self.invocations.lock().unwrap().iter().any(|n| *n == name)
    }

    pub fn invocations(&self) -> Vec<&'static str> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn page_tokens(&self) -> Vec<String> {
        self.page_tokens.lock().unwrap().clone()
    }

    /// Filter maps received by list calls, keyed by the debug name of the
    /// typed field (e.g. "CustomerId", "Deleted").
    pub fn filter_maps(&self) -> Vec<HashMap<String, FilterValue>> {
        self.filter_maps.lock().unwrap().clone()
    }

    pub fn timeouts(&self) -> Vec<i32> {
        self.timeouts.lock().unwrap().clone()
    }

    fn record(&self, name: &'static str) {
        self.invocations.lock().unwrap().push(name);
    }

    fn record_list(&self, name: &'static str, token: &str) {
        self.record(name);
        self.page_tokens.lock().unwrap().push(token.to_string());
    }

    fn record_filters<F: std::fmt::Debug>(&self, filters: &HashMap<F, FilterValue>) {
        let snapshot = filters
            .iter()
            .map(|(field, value)| (format!("{field:?}"), value.clone()))
            .collect();
        self.filter_maps.lock().unwrap().push(snapshot);
    }

    fn record_timeout(&self, name: &'static str, timeout: i32) {
        self.record(name);
        self.timeouts.lock().unwrap().push(timeout);
    }
}

fn get<T: Clone>(store: &HashMap<Uuid, T>, id: Uuid) -> Result<T, BackendError> {
    store.get(&id).cloned().ok_or(BackendError::NotFound)
}

fn deleted<T>(mut v: T, set: impl FnOnce(&mut T)) -> T {
    set(&mut v);
    v
}

#[async_trait]
impl RequestHandler for MockBackend {
    async fn ai_v1_ai_create(
        &self,
        customer_id: Uuid,
        name: &str,
        detail: &str,
        engine_type: ai::EngineType,
        engine_model: &str,
        engine_key: &str,
        init_prompt: &str,
    ) -> Result<ai::Ai, BackendError> {
        self.record("ai_v1_ai_create");
        let mut v = make_ai(customer_id);
        v.name = name.to_string();
        v.detail = detail.to_string();
        v.engine_type = engine_type;
        v.engine_model = engine_model.to_string();
        v.engine_key = engine_key.to_string();
        v.init_prompt = init_prompt.to_string();
        Ok(v)
    }

    async fn ai_v1_ai_get(&self, ai_id: Uuid) -> Result<ai::Ai, BackendError> {
        self.record("ai_v1_ai_get");
        get(&self.ais, ai_id)
    }

    async fn ai_v1_ai_list(
        &self,
        page_token: &str,
        _page_size: u64,
        filters: HashMap<ai::Field, FilterValue>,
    ) -> Result<Vec<ai::Ai>, BackendError> {
        self.record_list("ai_v1_ai_list", page_token);
        self.record_filters(&filters);
        Ok(self.ais.values().cloned().collect())
    }

    async fn ai_v1_ai_update(
        &self,
        ai_id: Uuid,
        name: &str,
        detail: &str,
        engine_type: ai::EngineType,
        engine_model: &str,
        engine_key: &str,
        init_prompt: &str,
    ) -> Result<ai::Ai, BackendError> {
        self.record("ai_v1_ai_update");
        let mut v = get(&self.ais, ai_id)?;
        v.name = name.to_string();
        v.detail = detail.to_string();
        v.engine_type = engine_type;
        v.engine_model = engine_model.to_string();
        v.engine_key = engine_key.to_string();
        v.init_prompt = init_prompt.to_string();
        Ok(v)
    }

    async fn ai_v1_ai_delete(&self, ai_id: Uuid) -> Result<ai::Ai, BackendError> {
        self.record("ai_v1_ai_delete");
        Ok(deleted(get(&self.ais, ai_id)?, |v| {
            v.tm_delete = TM_DELETED.to_string()
        }))
    }

    async fn ai_v1_aicall_start(
        &self,
        activeflow_id: Uuid,
        ai_id: Uuid,
        reference_type: aicall::ReferenceType,
        reference_id: Uuid,
        gender: aicall::Gender,
        language: &str,
    ) -> Result<aicall::Aicall, BackendError> {
        self.record("ai_v1_aicall_start");
        let customer_id = self
            .ais
            .get(&ai_id)
            .map(|a| a.identity.customer_id)
            .unwrap_or_else(Uuid::new_v4);
        let mut v = make_aicall(customer_id, ai_id);
        v.activeflow_id = activeflow_id;
        v.reference_type = reference_type;
        v.reference_id = reference_id;
        v.status = aicall::Status::Initiating;
        v.gender = gender;
        v.language = language.to_string();
        Ok(v)
    }

    async fn ai_v1_aicall_get(&self, aicall_id: Uuid) -> Result<aicall::Aicall, BackendError> {
        self.record("ai_v1_aicall_get");
        get(&self.aicalls, aicall_id)
    }

    async fn ai_v1_aicall_list(
        &self,
        page_token: &str,
        _page_size: u64,
        filters: HashMap<aicall::Field, FilterValue>,
    ) -> Result<Vec<aicall::Aicall>, BackendError> {
        self.record_list("ai_v1_aicall_list", page_token);
        self.record_filters(&filters);
        Ok(self.aicalls.values().cloned().collect())
    }

    async fn ai_v1_aicall_delete(&self, aicall_id: Uuid) -> Result<aicall::Aicall, BackendError> {
        self.record("ai_v1_aicall_delete");
        Ok(deleted(get(&self.aicalls, aicall_id)?, |v| {
            v.tm_delete = TM_DELETED.to_string()
        }))
    }

    async fn ai_v1_message_send(
        &self,
        aicall_id: Uuid,
        role: ai_message::Role,
        content: &str,
        _run_immediately: bool,
        request_timeout: i32,
    ) -> Result<ai_message::AiMessage, BackendError> {
        self.record_timeout("ai_v1_message_send", request_timeout);
        let customer_id = self
            .aicalls
            .get(&aicall_id)
            .map(|a| a.identity.customer_id)
            .unwrap_or_else(Uuid::new_v4);
        let mut v = make_ai_message(customer_id, aicall_id);
        v.role = role;
        v.content = content.to_string();
        Ok(v)
    }

    async fn ai_v1_message_list_by_aicall_id(
        &self,
        aicall_id: Uuid,
        page_token: &str,
        _page_size: u64,
        filters: HashMap<ai_message::Field, FilterValue>,
    ) -> Result<Vec<ai_message::AiMessage>, BackendError> {
        self.record_list("ai_v1_message_list_by_aicall_id", page_token);
        self.record_filters(&filters);
        Ok(self
            .ai_messages
            .iter()
            .filter(|m| m.aicall_id == aicall_id)
            .cloned()
            .collect())
    }

    async fn ai_v1_summary_create(
        &self,
        customer_id: Uuid,
        activeflow_id: Uuid,
        on_end_flow_id: Uuid,
        reference_type: summary::ReferenceType,
        reference_id: Uuid,
        language: &str,
        request_timeout: i32,
    ) -> Result<summary::Summary, BackendError> {
        self.record_timeout("ai_v1_summary_create", request_timeout);
        let mut v = make_summary(customer_id);
        v.activeflow_id = activeflow_id;
        v.on_end_flow_id = on_end_flow_id;
        v.reference_type = reference_type;
        v.reference_id = reference_id;
        v.status = summary::Status::Progressing;
        v.language = language.to_string();
        v.content = String::new();
        Ok(v)
    }

    async fn ai_v1_summary_get(&self, summary_id: Uuid) -> Result<summary::Summary, BackendError> {
        self.record("ai_v1_summary_get");
        get(&self.summaries, summary_id)
    }

    async fn ai_v1_summary_list(
        &self,
        page_token: &str,
        _page_size: u64,
        filters: HashMap<summary::Field, FilterValue>,
    ) -> Result<Vec<summary::Summary>, BackendError> {
        self.record_list("ai_v1_summary_list", page_token);
        self.record_filters(&filters);
        Ok(self.summaries.values().cloned().collect())
    }

    async fn ai_v1_summary_delete(
        &self,
        summary_id: Uuid,
    ) -> Result<summary::Summary, BackendError> {
        self.record("ai_v1_summary_delete");
        Ok(deleted(get(&self.summaries, summary_id)?, |v| {
            v.tm_delete = TM_DELETED.to_string()
        }))
    }

    async fn call_v1_call_get(&self, call_id: Uuid) -> Result<call::Call, BackendError> {
        self.record("call_v1_call_get");
        get(&self.calls, call_id)
    }

    async fn call_v1_recording_get(
        &self,
        recording_id: Uuid,
    ) -> Result<recording::Recording, BackendError> {
        self.record("call_v1_recording_get");
        get(&self.recordings, recording_id)
    }

    async fn call_v1_recording_list(
        &self,
        page_token: &str,
        _page_size: u64,
        filters: HashMap<recording::Field, FilterValue>,
    ) -> Result<Vec<recording::Recording>, BackendError> {
        self.record_list("call_v1_recording_list", page_token);
        self.record_filters(&filters);
        Ok(self.recordings.values().cloned().collect())
    }

    async fn call_v1_recording_delete(
        &self,
        recording_id: Uuid,
    ) -> Result<recording::Recording, BackendError> {
        self.record("call_v1_recording_delete");
        Ok(deleted(get(&self.recordings, recording_id)?, |v| {
            v.tm_delete = TM_DELETED.to_string()
        }))
    }

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
    ) -> Result<conference::Conference, BackendError> {
        self.record("conference_v1_conference_create");
        let mut v = make_conference(customer_id);
        v.conference_type = conference_type;
        v.status = conference::Status::Starting;
        v.name = name.to_string();
        v.detail = detail.to_string();
        v.data = data;
        v.timeout = timeout;
        v.pre_flow_id = pre_flow_id;
        v.post_flow_id = post_flow_id;
        Ok(v)
    }

    async fn conference_v1_conference_get(
        &self,
        conference_id: Uuid,
    ) -> Result<conference::Conference, BackendError> {
        self.record("conference_v1_conference_get");
        get(&self.conferences, conference_id)
    }

    async fn conference_v1_conference_list(
        &self,
        page_token: &str,
        _page_size: u64,
        filters: HashMap<conference::Field, FilterValue>,
    ) -> Result<Vec<conference::Conference>, BackendError> {
        self.record_list("conference_v1_conference_list", page_token);
        self.record_filters(&filters);
        Ok(self.conferences.values().cloned().collect())
    }

    async fn conference_v1_conference_update(
        &self,
        conference_id: Uuid,
        name: &str,
        detail: &str,
        data: HashMap<String, serde_json::Value>,
        timeout: i32,
        pre_flow_id: Uuid,
        post_flow_id: Uuid,
    ) -> Result<conference::Conference, BackendError> {
        self.record("conference_v1_conference_update");
        let mut v = get(&self.conferences, conference_id)?;
        v.name = name.to_string();
        v.detail = detail.to_string();
        v.data = data;
        v.timeout = timeout;
        v.pre_flow_id = pre_flow_id;
        v.post_flow_id = post_flow_id;
        Ok(v)
    }

    async fn conference_v1_conference_delete(
        &self,
        conference_id: Uuid,
    ) -> Result<conference::Conference, BackendError> {
        self.record("conference_v1_conference_delete");
        Ok(deleted(get(&self.conferences, conference_id)?, |v| {
            v.tm_delete = TM_DELETED.to_string()
        }))
    }

    async fn conference_v1_conference_recording_start(
        &self,
        conference_id: Uuid,
        _format: recording::Format,
    ) -> Result<conference::Conference, BackendError> {
        self.record("conference_v1_conference_recording_start");
        let mut v = get(&self.conferences, conference_id)?;
        v.recording_id = Uuid::new_v4();
        Ok(v)
    }

    async fn conference_v1_conference_recording_stop(
        &self,
        conference_id: Uuid,
    ) -> Result<conference::Conference, BackendError> {
        self.record("conference_v1_conference_recording_stop");
        let mut v = get(&self.conferences, conference_id)?;
        v.recording_id = Uuid::nil();
        Ok(v)
    }

    async fn conference_v1_conference_transcribe_start(
        &self,
        conference_id: Uuid,
        _language: &str,
    ) -> Result<conference::Conference, BackendError> {
        self.record("conference_v1_conference_transcribe_start");
        let mut v = get(&self.conferences, conference_id)?;
        v.transcribe_id = Uuid::new_v4();
        Ok(v)
    }

    async fn conference_v1_conference_transcribe_stop(
        &self,
        conference_id: Uuid,
    ) -> Result<conference::Conference, BackendError> {
        self.record("conference_v1_conference_transcribe_stop");
        let mut v = get(&self.conferences, conference_id)?;
        v.transcribe_id = Uuid::nil();
        Ok(v)
    }

    async fn outdial_v1_outdial_create(
        &self,
        customer_id: Uuid,
        campaign_id: Uuid,
        name: &str,
        detail: &str,
        data: &str,
    ) -> Result<outdial::Outdial, BackendError> {
        self.record("outdial_v1_outdial_create");
        let mut v = make_outdial(customer_id);
        v.campaign_id = campaign_id;
        v.name = name.to_string();
        v.detail = detail.to_string();
        v.data = data.to_string();
        Ok(v)
    }

    async fn outdial_v1_outdial_get(
        &self,
        outdial_id: Uuid,
    ) -> Result<outdial::Outdial, BackendError> {
        self.record("outdial_v1_outdial_get");
        get(&self.outdials, outdial_id)
    }

    async fn outdial_v1_outdial_list(
        &self,
        page_token: &str,
        _page_size: u64,
        filters: HashMap<outdial::Field, FilterValue>,
    ) -> Result<Vec<outdial::Outdial>, BackendError> {
        self.record_list("outdial_v1_outdial_list", page_token);
        self.record_filters(&filters);
        Ok(self.outdials.values().cloned().collect())
    }

    async fn outdial_v1_outdial_delete(
        &self,
        outdial_id: Uuid,
    ) -> Result<outdial::Outdial, BackendError> {
        self.record("outdial_v1_outdial_delete");
        Ok(deleted(get(&self.outdials, outdial_id)?, |v| {
            v.tm_delete = TM_DELETED.to_string()
        }))
    }

    async fn outdial_v1_outdial_update_basic_info(
        &self,
        outdial_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<outdial::Outdial, BackendError> {
        self.record("outdial_v1_outdial_update_basic_info");
        let mut v = get(&self.outdials, outdial_id)?;
        v.name = name.to_string();
        v.detail = detail.to_string();
        Ok(v)
    }

    async fn outdial_v1_outdial_update_campaign_id(
        &self,
        outdial_id: Uuid,
        campaign_id: Uuid,
    ) -> Result<outdial::Outdial, BackendError> {
        self.record("outdial_v1_outdial_update_campaign_id");
        let mut v = get(&self.outdials, outdial_id)?;
        v.campaign_id = campaign_id;
        Ok(v)
    }

    async fn outdial_v1_outdial_update_data(
        &self,
        outdial_id: Uuid,
        data: &str,
    ) -> Result<outdial::Outdial, BackendError> {
        self.record("outdial_v1_outdial_update_data");
        let mut v = get(&self.outdials, outdial_id)?;
        v.data = data.to_string();
        Ok(v)
    }

    async fn outdial_v1_outdialtarget_create(
        &self,
        outdial_id: Uuid,
        name: &str,
        detail: &str,
        data: &str,
        destinations: &[Address],
    ) -> Result<outdialtarget::OutdialTarget, BackendError> {
        self.record("outdial_v1_outdialtarget_create");
        let mut v = make_outdialtarget(outdial_id);
        v.name = name.to_string();
        v.detail = detail.to_string();
        v.data = data.to_string();
        v.destinations = destinations.to_vec();
        Ok(v)
    }

    async fn outdial_v1_outdialtarget_get(
        &self,
        outdialtarget_id: Uuid,
    ) -> Result<outdialtarget::OutdialTarget, BackendError> {
        self.record("outdial_v1_outdialtarget_get");
        get(&self.outdialtargets, outdialtarget_id)
    }

    async fn outdial_v1_outdialtarget_list_by_outdial_id(
        &self,
        outdial_id: Uuid,
        page_token: &str,
        _page_size: u64,
    ) -> Result<Vec<outdialtarget::OutdialTarget>, BackendError> {
        self.record_list("outdial_v1_outdialtarget_list_by_outdial_id", page_token);
        Ok(self
            .outdialtargets
            .values()
            .filter(|t| t.outdial_id == outdial_id)
            .cloned()
            .collect())
    }

    async fn outdial_v1_outdialtarget_delete(
        &self,
        outdialtarget_id: Uuid,
    ) -> Result<outdialtarget::OutdialTarget, BackendError> {
        self.record("outdial_v1_outdialtarget_delete");
        Ok(deleted(get(&self.outdialtargets, outdialtarget_id)?, |v| {
            v.tm_delete = TM_DELETED.to_string()
        }))
    }

    async fn storage_v1_file_create(
        &self,
        customer_id: Uuid,
        owner_id: Uuid,
        name: &str,
        detail: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<file::File, BackendError> {
        self.record("storage_v1_file_create");
        let mut v = make_file(customer_id, owner_id);
        v.name = name.to_string();
        v.detail = detail.to_string();
        v.filename = filename.to_string();
        v.filesize = data.len() as u64;
        Ok(v)
    }

    async fn storage_v1_file_get(&self, file_id: Uuid) -> Result<file::File, BackendError> {
        self.record("storage_v1_file_get");
        get(&self.files, file_id)
    }

    async fn storage_v1_file_list(
        &self,
        page_token: &str,
        _page_size: u64,
        filters: HashMap<file::Field, FilterValue>,
    ) -> Result<Vec<file::File>, BackendError> {
        self.record_list("storage_v1_file_list", page_token);
        self.record_filters(&filters);
        Ok(self.files.values().cloned().collect())
    }

    async fn storage_v1_file_delete(
        &self,
        file_id: Uuid,
        request_timeout: i32,
    ) -> Result<file::File, BackendError> {
        self.record_timeout("storage_v1_file_delete", request_timeout);
        Ok(deleted(get(&self.files, file_id)?, |v| {
            v.tm_delete = TM_DELETED.to_string()
        }))
    }

    async fn tag_v1_tag_create(
        &self,
        customer_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<tag::Tag, BackendError> {
        self.record("tag_v1_tag_create");
        let mut v = make_tag(customer_id);
        v.name = name.to_string();
        v.detail = detail.to_string();
        Ok(v)
    }

    async fn tag_v1_tag_get(&self, tag_id: Uuid) -> Result<tag::Tag, BackendError> {
        self.record("tag_v1_tag_get");
        get(&self.tags, tag_id)
    }

    async fn tag_v1_tag_list(
        &self,
        page_token: &str,
        _page_size: u64,
        filters: HashMap<tag::Field, FilterValue>,
    ) -> Result<Vec<tag::Tag>, BackendError> {
        self.record_list("tag_v1_tag_list", page_token);
        self.record_filters(&filters);
        Ok(self.tags.values().cloned().collect())
    }

    async fn tag_v1_tag_update(
        &self,
        tag_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<tag::Tag, BackendError> {
        self.record("tag_v1_tag_update");
        let mut v = get(&self.tags, tag_id)?;
        v.name = name.to_string();
        v.detail = detail.to_string();
        Ok(v)
    }

    async fn tag_v1_tag_delete(&self, tag_id: Uuid) -> Result<tag::Tag, BackendError> {
        self.record("tag_v1_tag_delete");
        Ok(deleted(get(&self.tags, tag_id)?, |v| {
            v.tm_delete = TM_DELETED.to_string()
        }))
    }

    async fn transcribe_v1_transcribe_start(
        &self,
        customer_id: Uuid,
        activeflow_id: Uuid,
        on_end_flow_id: Uuid,
        reference_type: transcribe::ReferenceType,
        reference_id: Uuid,
        language: &str,
        direction: transcribe::Direction,
    ) -> Result<transcribe::Transcribe, BackendError> {
        self.record("transcribe_v1_transcribe_start");
        let mut v = make_transcribe(customer_id);
        v.activeflow_id = activeflow_id;
        v.on_end_flow_id = on_end_flow_id;
        v.reference_type = reference_type;
        v.reference_id = reference_id;
        v.status = transcribe::Status::Progressing;
        v.language = language.to_string();
        v.direction = direction;
        Ok(v)
    }

    async fn transcribe_v1_transcribe_get(
        &self,
        transcribe_id: Uuid,
    ) -> Result<transcribe::Transcribe, BackendError> {
        self.record("transcribe_v1_transcribe_get");
        get(&self.transcribes, transcribe_id)
    }

    async fn transcribe_v1_transcribe_list(
        &self,
        page_token: &str,
        _page_size: u64,
        filters: HashMap<transcribe::Field, FilterValue>,
    ) -> Result<Vec<transcribe::Transcribe>, BackendError> {
        self.record_list("transcribe_v1_transcribe_list", page_token);
        self.record_filters(&filters);
        Ok(self.transcribes.values().cloned().collect())
    }

    async fn transcribe_v1_transcribe_stop(
        &self,
        transcribe_id: Uuid,
    ) -> Result<transcribe::Transcribe, BackendError> {
        self.record("transcribe_v1_transcribe_stop");
        let mut v = get(&self.transcribes, transcribe_id)?;
        v.status = transcribe::Status::Done;
        Ok(v)
    }

    async fn transcribe_v1_transcribe_delete(
        &self,
        transcribe_id: Uuid,
    ) -> Result<transcribe::Transcribe, BackendError> {
        self.record("transcribe_v1_transcribe_delete");
        Ok(deleted(get(&self.transcribes, transcribe_id)?, |v| {
            v.tm_delete = TM_DELETED.to_string()
        }))
    }

    async fn transcribe_v1_transcript_list(
        &self,
        page_token: &str,
        _page_size: u64,
        filters: HashMap<transcript::Field, FilterValue>,
    ) -> Result<Vec<transcript::Transcript>, BackendError> {
        self.record_list("transcribe_v1_transcript_list", page_token);
        self.record_filters(&filters);
        Ok(self.transcripts.clone())
    }
}
