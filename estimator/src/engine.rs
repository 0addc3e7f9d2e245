use rand::Rng;
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use training_plan::{PlanRequest, PlanTemplate, TrainingPlan};
use uuid::Uuid;
use velocity::analysis::{self, AdvancedAnalysis, DEFAULT_DISPLACEMENT, SimilarWorkouts};
use velocity::{LiftSample, VbtEntry};

use crate::health::{HealthEntry, HealthRecord, sort_by_date};
use crate::labels::{Translator, fallback_label};
use crate::store::{
    HEALTH_RECORDS_KEY, KeyValueStore, TRAINING_PLANS_KEY, VBT_HISTORY_KEY, load_list, save_list,
};
use crate::{
    Calculator, EstimationError, EstimatorConfig, Fields, HistoryRecord, MeasurementInput,
    Outcome, Saved, StorageError, ValidationError, calculators,
};

/// Entry point of the engine: computes metrics and keeps the user's
/// records in the injected store.
#[derive(Debug)]
pub struct Estimator<S> {
    store: S,
    config: EstimatorConfig,
}

impl<S: KeyValueStore> Estimator<S> {
    pub fn new(store: S, config: EstimatorConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn compute(&self, input: &MeasurementInput) -> Result<Outcome, EstimationError> {
        let calculator = input.calculator();
        debug!(calculator = calculator.id(), "computing metric");

        let outcome = calculators::compute(input, self.config.max_heart_rate_formula)?;
        if let Outcome::Unclassified { .. } = outcome {
            debug!(calculator = calculator.id(), "input not covered by the table");
        }

        Ok(outcome)
    }

    /// Parse raw form fields and compute.
    pub fn compute_fields(
        &self,
        calculator: Calculator,
        fields: &Fields,
    ) -> Result<Outcome, EstimationError> {
        let input = MeasurementInput::parse(calculator, fields)?;
        self.compute(&input)
    }

    /// Compute and append the result to the history.
    ///
    /// Storage failures do not lose the metric: it is returned with the
    /// failure as a warning.
    pub fn compute_and_save(
        &mut self,
        input: MeasurementInput,
        notes: impl Into<String>,
    ) -> Result<Saved, EstimationError> {
        let metric = match self.compute(&input)? {
            Outcome::Classified(metric) => metric,
            Outcome::Unclassified { calculator } => return Ok(Saved::Unclassified { calculator }),
        };

        let record = HistoryRecord::new(input, metric, notes.into(), OffsetDateTime::now_utc());
        let warning = self.append_history(&record).err();

        match &warning {
            Some(err) => warn!(
                record_id = %record.id,
                error = %err,
                "failed to save estimation, returning unsaved record"
            ),
            None => info!(
                record_id = %record.id,
                calculator = record.input.calculator().id(),
                "saved estimation"
            ),
        }

        Ok(Saved::Recorded { record, warning })
    }

    fn append_history(&mut self, record: &HistoryRecord) -> Result<(), StorageError> {
        let key = self.config.history_key;
        let mut history: Vec<HistoryRecord> = load_list(&self.store, key)?;
        history.push(record.clone());
        save_list(&mut self.store, key, &history)
    }

    /// Saved estimations, oldest first.
    pub fn history(&self) -> Result<Vec<HistoryRecord>, StorageError> {
        load_list(&self.store, self.config.history_key)
    }

    /// Remove a saved estimation. `false` when no record has the id.
    pub fn delete_history(&mut self, id: Uuid) -> Result<bool, StorageError> {
        let key = self.config.history_key;
        let mut history: Vec<HistoryRecord> = load_list(&self.store, key)?;

        let len = history.len();
        history.retain(|record| record.id != id);
        if history.len() == len {
            return Ok(false);
        }

        save_list(&mut self.store, key, &history)?;
        info!(record_id = %id, "deleted estimation");
        Ok(true)
    }

    /// Display name of an identifier such as a zone id, in the configured
    /// locale.
    pub fn display_label(&self, key: &str, translator: &dyn Translator) -> String {
        translator.translate(key, fallback_label(key, self.config.display.locale))
    }

    /// Classify a measured set and append it to the VBT history.
    pub fn record_vbt_entry(
        &mut self,
        sample: LiftSample,
        displacement: Option<f64>,
    ) -> Result<VbtEntry, EstimationError> {
        validate_sample(&sample)?;

        let entry = VbtEntry::record(
            sample,
            displacement.unwrap_or(DEFAULT_DISPLACEMENT),
            OffsetDateTime::now_utc(),
        );

        let mut history = self.vbt_history()?;
        history.push(entry.clone());
        save_list(&mut self.store, VBT_HISTORY_KEY, &history)?;

        info!(
            exercise = entry.sample.exercise.id(),
            zone = entry.zone.id(),
            "recorded VBT set"
        );
        Ok(entry)
    }

    pub fn vbt_history(&self) -> Result<Vec<VbtEntry>, StorageError> {
        load_list(&self.store, VBT_HISTORY_KEY)
    }

    /// Heuristic analysis of a set against the VBT history. Random while the
    /// history is short, see [`analysis::SPARSE_HISTORY_LEN`].
    pub fn advanced_analysis<R: Rng>(
        &self,
        sample: &LiftSample,
        rng: &mut R,
    ) -> Result<AdvancedAnalysis, EstimationError> {
        validate_sample(sample)?;
        let history = self.vbt_history()?;

        if history.len() < analysis::SPARSE_HISTORY_LEN {
            warn!(
                history_len = history.len(),
                "short VBT history, analysis includes random jitter"
            );
        }

        Ok(analysis::advanced_analysis(sample, &history, rng)?)
    }

    pub fn similar_workouts(
        &self,
        sample: &LiftSample,
    ) -> Result<Option<SimilarWorkouts>, StorageError> {
        let history = self.vbt_history()?;
        Ok(analysis::similar_workouts(sample, &history))
    }

    /// Health records, latest date first.
    pub fn health_records(&self) -> Result<Vec<HealthRecord>, StorageError> {
        load_list(&self.store, HEALTH_RECORDS_KEY)
    }

    pub fn add_health_record(&mut self, entry: HealthEntry) -> Result<HealthRecord, EstimationError> {
        entry.validate()?;

        let record = HealthRecord::new(entry, OffsetDateTime::now_utc());
        let mut records = self.health_records()?;
        records.push(record.clone());
        sort_by_date(&mut records);
        save_list(&mut self.store, HEALTH_RECORDS_KEY, &records)?;

        info!(record_id = %record.id, "saved health record");
        Ok(record)
    }

    /// Edit a health record. `None` when no record has the id.
    pub fn update_health_record(
        &mut self,
        id: Uuid,
        entry: HealthEntry,
    ) -> Result<Option<HealthRecord>, EstimationError> {
        entry.validate()?;

        let mut records = self.health_records()?;
        let Some(record) = records.iter_mut().find(|record| record.id == id) else {
            return Ok(None);
        };
        record.amend(entry);
        let updated = record.clone();

        sort_by_date(&mut records);
        save_list(&mut self.store, HEALTH_RECORDS_KEY, &records)?;

        info!(record_id = %id, "updated health record");
        Ok(Some(updated))
    }

    pub fn delete_health_record(&mut self, id: Uuid) -> Result<bool, StorageError> {
        let mut records = self.health_records()?;

        let len = records.len();
        records.retain(|record| record.id != id);
        if records.len() == len {
            return Ok(false);
        }

        save_list(&mut self.store, HEALTH_RECORDS_KEY, &records)?;
        info!(record_id = %id, "deleted health record");
        Ok(true)
    }

    /// Lay out a training plan and append it to the saved plans.
    pub fn create_plan(&mut self, request: PlanRequest) -> Result<TrainingPlan, EstimationError> {
        let plan = TrainingPlan::create(request, OffsetDateTime::now_utc())?;

        let mut plans = self.plans()?;
        plans.push(plan.clone());
        save_list(&mut self.store, TRAINING_PLANS_KEY, &plans)?;

        info!(plan_id = %plan.id, weeks = plan.duration_weeks, "created training plan");
        Ok(plan)
    }

    /// Save a copy of a ready-made plan.
    pub fn create_plan_from_template(
        &mut self,
        template: PlanTemplate,
    ) -> Result<TrainingPlan, EstimationError> {
        debug!(template = template.id(), "creating plan from template");
        self.create_plan(template.request())
    }

    pub fn plans(&self) -> Result<Vec<TrainingPlan>, StorageError> {
        load_list(&self.store, TRAINING_PLANS_KEY)
    }

    pub fn delete_plan(&mut self, id: &str) -> Result<bool, StorageError> {
        let mut plans = self.plans()?;

        let len = plans.len();
        plans.retain(|plan| plan.id != id);
        if plans.len() == len {
            return Ok(false);
        }

        save_list(&mut self.store, TRAINING_PLANS_KEY, &plans)?;
        info!(plan_id = id, "deleted training plan");
        Ok(true)
    }
}

/// A set needs a positive load and velocity. Body measurements only feed
/// the analysis and must be positive too.
fn validate_sample(sample: &LiftSample) -> Result<(), ValidationError> {
    let fields = [
        ("lifted_weight", sample.lifted_weight),
        ("avg_velocity", sample.avg_velocity),
        ("body_weight", sample.body_weight),
        ("height", sample.height),
    ];

    for (field, value) in fields {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field, value });
        }
        if value <= 0.0 {
            return Err(ValidationError::NotPositive { field, value });
        }
    }

    Ok(())
}
