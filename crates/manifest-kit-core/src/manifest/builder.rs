use crate::{
    manifest::{Instruction, ManifestError, TransactionManifest},
    types::{Address, Blob, Bucket, Decimal, Expression, Proof, TransientIdentifier},
    value::ManifestValue,
};
use std::collections::BTreeSet;

///
/// Step
///
/// One fallible transform of the builder; a manifest is an ordered list of
/// these applied with [`ManifestBuilder::compose`].
///

pub type Step = Box<dyn FnOnce(ManifestBuilder) -> Result<ManifestBuilder, ManifestError>>;

///
/// ManifestBuilder
///
/// Consuming builder. Tracks which named buckets and proofs are live so a
/// manifest never references one that was never created or already moved.
///

#[derive(Clone, Debug, Default)]
pub struct ManifestBuilder {
    instructions: Vec<Instruction>,
    blobs: Vec<Vec<u8>>,
    buckets: BTreeSet<TransientIdentifier>,
    proofs: BTreeSet<TransientIdentifier>,
    names: BTreeSet<TransientIdentifier>,
}

impl ManifestBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `steps` in order, stopping at the first failure.
    pub fn compose(steps: impl IntoIterator<Item = Step>) -> Result<Self, ManifestError> {
        steps
            .into_iter()
            .try_fold(Self::new(), |builder, step| step(builder))
    }

    /// Shorthand for boxing a closure as a [`Step`].
    pub fn step<F>(f: F) -> Step
    where
        F: FnOnce(Self) -> Result<Self, ManifestError> + 'static,
    {
        Box::new(f)
    }

    ///
    /// STATE
    ///

    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    #[must_use]
    pub fn is_bucket_live(&self, bucket: &Bucket) -> bool {
        self.buckets.contains(bucket.identifier())
    }

    #[must_use]
    pub fn is_proof_live(&self, proof: &Proof) -> bool {
        self.proofs.contains(proof.identifier())
    }

    /// First `bucket{n}` name not yet used in this manifest.
    #[must_use]
    pub fn fresh_bucket(&self) -> Bucket {
        Bucket(self.fresh_name("bucket"))
    }

    /// First `proof{n}` name not yet used in this manifest.
    #[must_use]
    pub fn fresh_proof(&self) -> Proof {
        Proof(self.fresh_name("proof"))
    }

    fn fresh_name(&self, prefix: &str) -> TransientIdentifier {
        (1u32..)
            .map(|n| TransientIdentifier::String(format!("{prefix}{n}")))
            .find(|name| !self.names.contains(name))
            .unwrap_or_else(|| TransientIdentifier::String(prefix.to_string()))
    }

    ///
    /// INSTRUCTIONS
    ///

    /// Append any instruction, checking its bucket and proof references.
    pub fn instruction(mut self, instruction: Instruction) -> Result<Self, ManifestError> {
        self.track(&instruction)?;
        tracing::debug!(
            instruction = instruction.name(),
            index = self.instructions.len(),
            "manifest instruction added"
        );
        self.instructions.push(instruction);

        Ok(self)
    }

    /// Insert `instruction` before `index`. Liveness is not re-checked for
    /// insertions; use [`Self::instruction`] to append with checks.
    pub fn insert_instruction(
        mut self,
        instruction: Instruction,
        index: usize,
    ) -> Result<Self, ManifestError> {
        let len = self.instructions.len();
        if index > len {
            return Err(ManifestError::InstructionIndexOutOfBounds { index, len });
        }

        tracing::debug!(
            instruction = instruction.name(),
            index,
            "manifest instruction inserted"
        );
        self.instructions.insert(index, instruction);

        Ok(self)
    }

    /// Attach `content` and return the reference instructions can embed.
    pub fn add_blob(mut self, content: impl Into<Vec<u8>>) -> (Self, Blob) {
        let content = content.into();
        let blob = Blob::from_content(&content);
        tracing::debug!(hash = %blob, bytes = content.len(), "manifest blob attached");
        self.blobs.push(content);

        (self, blob)
    }

    pub fn lock_fee(self, account: Address, amount: Decimal) -> Result<Self, ManifestError> {
        self.instruction(Instruction::lock_fee(account, amount))
    }

    pub fn withdraw(
        self,
        account: Address,
        resource_address: Address,
        amount: Decimal,
    ) -> Result<Self, ManifestError> {
        self.call_method(
            account,
            "withdraw",
            vec![resource_address.into(), amount.into()],
        )
    }

    pub fn take_from_worktop(
        self,
        resource_address: Address,
        amount: Decimal,
        into_bucket: Bucket,
    ) -> Result<Self, ManifestError> {
        self.instruction(Instruction::TakeFromWorktopByAmount {
            amount,
            resource_address,
            into_bucket,
        })
    }

    /// Deposit a live bucket into `account`; the bucket is consumed.
    pub fn deposit(self, account: Address, bucket: Bucket) -> Result<Self, ManifestError> {
        self.call_method(account, "deposit", vec![bucket.into()])
    }

    pub fn try_deposit_entire_worktop_or_abort(
        self,
        account: Address,
    ) -> Result<Self, ManifestError> {
        self.call_method(
            account,
            "try_deposit_batch_or_abort",
            vec![Expression::EntireWorktop.into()],
        )
    }

    pub fn call_method(
        self,
        component_address: Address,
        method_name: impl Into<String>,
        arguments: Vec<ManifestValue>,
    ) -> Result<Self, ManifestError> {
        self.instruction(Instruction::CallMethod {
            component_address,
            method_name: method_name.into(),
            arguments,
        })
    }

    pub fn call_function(
        self,
        package_address: Address,
        blueprint_name: impl Into<String>,
        function_name: impl Into<String>,
        arguments: Vec<ManifestValue>,
    ) -> Result<Self, ManifestError> {
        self.instruction(Instruction::CallFunction {
            package_address,
            blueprint_name: blueprint_name.into(),
            function_name: function_name.into(),
            arguments,
        })
    }

    #[must_use]
    pub fn build(self) -> TransactionManifest {
        tracing::debug!(
            instructions = self.instructions.len(),
            blobs = self.blobs.len(),
            "manifest built"
        );

        TransactionManifest::new(self.instructions, self.blobs)
    }

    ///
    /// LIVENESS
    ///

    fn track(&mut self, instruction: &Instruction) -> Result<(), ManifestError> {
        match instruction {
            Instruction::CallFunction { arguments, .. }
            | Instruction::CallMethod { arguments, .. } => {
                let mut moved = Moved::default();
                for argument in arguments {
                    moved.collect(argument);
                }
                for bucket in &moved.buckets {
                    self.consume_bucket(bucket)?;
                }
                for proof in &moved.proofs {
                    self.consume_proof(proof)?;
                }
            }
            Instruction::TakeFromWorktop { into_bucket, .. }
            | Instruction::TakeFromWorktopByAmount { into_bucket, .. }
            | Instruction::TakeFromWorktopByIds { into_bucket, .. } => {
                self.create_bucket(into_bucket.identifier())?;
            }
            Instruction::ReturnToWorktop { bucket } | Instruction::BurnResource { bucket } => {
                self.consume_bucket(bucket.identifier())?;
            }
            Instruction::PopFromAuthZone { into_proof }
            | Instruction::CreateProofFromAuthZone { into_proof, .. }
            | Instruction::CreateProofFromAuthZoneByAmount { into_proof, .. }
            | Instruction::CreateProofFromAuthZoneByIds { into_proof, .. } => {
                self.create_proof(into_proof.identifier())?;
            }
            Instruction::CreateProofFromBucket { bucket, into_proof } => {
                self.require_bucket(bucket.identifier())?;
                self.create_proof(into_proof.identifier())?;
            }
            Instruction::CloneProof { proof, into_proof } => {
                self.require_proof(proof.identifier())?;
                self.create_proof(into_proof.identifier())?;
            }
            Instruction::PushToAuthZone { proof } | Instruction::DropProof { proof } => {
                self.consume_proof(proof.identifier())?;
            }
            Instruction::DropAllProofs => self.proofs.clear(),
            Instruction::AssertWorktopContains { .. }
            | Instruction::AssertWorktopContainsByAmount { .. }
            | Instruction::AssertWorktopContainsByIds { .. }
            | Instruction::ClearAuthZone
            | Instruction::MintFungible { .. }
            | Instruction::SetMetadata { .. } => {}
        }

        Ok(())
    }

    fn claim_name(&mut self, name: &TransientIdentifier) -> Result<(), ManifestError> {
        if !self.names.insert(name.clone()) {
            return Err(ManifestError::DuplicateName(display_name(name)));
        }

        Ok(())
    }

    fn create_bucket(&mut self, name: &TransientIdentifier) -> Result<(), ManifestError> {
        self.claim_name(name)?;
        self.buckets.insert(name.clone());

        Ok(())
    }

    fn create_proof(&mut self, name: &TransientIdentifier) -> Result<(), ManifestError> {
        self.claim_name(name)?;
        self.proofs.insert(name.clone());

        Ok(())
    }

    fn require_bucket(&self, name: &TransientIdentifier) -> Result<(), ManifestError> {
        if self.buckets.contains(name) {
            Ok(())
        } else {
            Err(ManifestError::UnknownBucket(display_name(name)))
        }
    }

    fn require_proof(&self, name: &TransientIdentifier) -> Result<(), ManifestError> {
        if self.proofs.contains(name) {
            Ok(())
        } else {
            Err(ManifestError::UnknownProof(display_name(name)))
        }
    }

    fn consume_bucket(&mut self, name: &TransientIdentifier) -> Result<(), ManifestError> {
        self.require_bucket(name)?;
        self.buckets.remove(name);

        Ok(())
    }

    fn consume_proof(&mut self, name: &TransientIdentifier) -> Result<(), ManifestError> {
        self.require_proof(name)?;
        self.proofs.remove(name);

        Ok(())
    }
}

// Bare name for error messages, without the manifest-text quoting.
fn display_name(name: &TransientIdentifier) -> String {
    match name {
        TransientIdentifier::String(text) => text.clone(),
        TransientIdentifier::U32(id) => id.to_string(),
    }
}

///
/// Moved
///
/// Buckets and proofs passed by value somewhere inside call arguments.
///

#[derive(Default)]
struct Moved {
    buckets: Vec<TransientIdentifier>,
    proofs: Vec<TransientIdentifier>,
}

impl Moved {
    fn collect(&mut self, value: &ManifestValue) {
        match value {
            ManifestValue::Bucket(bucket) => self.buckets.push(bucket.identifier().clone()),
            ManifestValue::Proof(proof) => self.proofs.push(proof.identifier().clone()),
            ManifestValue::Some(inner) | ManifestValue::Ok(inner) | ManifestValue::Err(inner) => {
                self.collect(inner);
            }
            ManifestValue::Enum(v) => v.fields.iter().for_each(|field| self.collect(field)),
            ManifestValue::Array(v) => v.elements().iter().for_each(|e| self.collect(e)),
            ManifestValue::Tuple(v) => v.elements().iter().for_each(|e| self.collect(e)),
            ManifestValue::Map(v) => {
                for (key, entry) in v.entries() {
                    self.collect(key);
                    self.collect(entry);
                }
            }
            _ => {}
        }
    }
}
