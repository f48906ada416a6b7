//! Process abstraction
//! A process is a statically chained list of stages. `ChainedProcess` is
//! monomorphised, so the compiler sees the concrete type of every stage and
//! inlines the whole chain. Each stage runs only if its quick check says the
//! text can change; untouched input stays borrowed end to end.
use crate::{
    context::Context,
    stage::{Compose, Decompose, Reorder, Stage, StageError},
};
use std::borrow::Cow;

pub trait Process {
    fn process<'a>(
        &self,
        text: Cow<'a, [u32]>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, [u32]>, StageError>;
}

pub struct EmptyProcess;

impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(
        &self,
        text: Cow<'a, [u32]>,
        _ctx: &Context<'_>,
    ) -> Result<Cow<'a, [u32]>, StageError> {
        Ok(text)
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(
        &self,
        text: Cow<'a, [u32]>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, [u32]>, StageError> {
        let current = self.previous.process(text, ctx)?;
        if !self.stage.needs_apply(&current, ctx)? {
            return Ok(current);
        }
        tracing::trace!(stage = self.stage.name(), form = %ctx.form, len = current.len(), "applying stage");
        self.stage.apply(current, ctx)
    }
}

/// Decompose → reorder (NFD, NFKD).
pub type DecomposingProcess = ChainedProcess<Reorder, ChainedProcess<Decompose, EmptyProcess>>;

/// Decompose → reorder → compose (NFC, NFKC).
pub type ComposingProcess = ChainedProcess<Compose, DecomposingProcess>;

pub const DECOMPOSING: DecomposingProcess = ChainedProcess {
    stage: Reorder,
    previous: ChainedProcess {
        stage: Decompose,
        previous: EmptyProcess,
    },
};

pub const COMPOSING: ComposingProcess = ChainedProcess {
    stage: Compose,
    previous: DECOMPOSING,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Form;

    #[test]
    fn untouched_input_stays_borrowed() {
        let input = [0x0068u32, 0x0065, 0x006C, 0x006C, 0x006F];
        for form in Form::ALL {
            let ctx = Context::new(form);
            let out = COMPOSING.process(Cow::Borrowed(&input[..]), &ctx).unwrap();
            assert!(matches!(out, Cow::Borrowed(b) if b.as_ptr() == input.as_ptr()));
            let out = DECOMPOSING.process(Cow::Borrowed(&input[..]), &ctx).unwrap();
            assert!(matches!(out, Cow::Borrowed(b) if b.as_ptr() == input.as_ptr()));
        }
    }

    #[test]
    fn chain_runs_stages_in_order() {
        let ctx = Context::new(Form::Nfc);
        // ǻ with an extra dot below: decompose, move ̣ forward, recompose
        let input = [0x01FB, 0x0323];
        let out = COMPOSING.process(Cow::Borrowed(&input[..]), &ctx).unwrap();
        assert_eq!(out.as_ref(), &[0x1EA1, 0x030A, 0x0301]);
        let out = DECOMPOSING
            .process(Cow::Borrowed(&input[..]), &Context::new(Form::Nfd))
            .unwrap();
        assert_eq!(out.as_ref(), &[0x0061, 0x0323, 0x030A, 0x0301]);
    }

    #[test]
    fn empty_process_is_identity() {
        let input = [0x00E9u32];
        let out = EmptyProcess
            .process(Cow::Borrowed(&input[..]), &Context::default())
            .unwrap();
        assert_eq!(out.as_ref(), &input);
    }
}
