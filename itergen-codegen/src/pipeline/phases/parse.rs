//! Parse phase - turns raw type tokens into descriptors.

use tracing::debug;

use crate::{
    Result, TypeDescriptor,
    pipeline::{GenerationContext, Phase},
};

/// Phase that parses the primary, map result and reduce types.
pub struct ParsePhase;

impl Phase for ParsePhase {
    fn name(&self) -> &'static str {
        "parse"
    }

    fn description(&self) -> &'static str {
        "Parse type tokens into descriptors"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let primary = TypeDescriptor::parse(&ctx.request.raw_type)?;
        debug!(
            name = %primary.name,
            package = %primary.package,
            ty = %primary.type_text,
            kind = %primary.kind(),
            "parsed primary type"
        );

        let map_results = parse_all(&ctx.request.map)?;
        let reducers = parse_all(&ctx.request.reduce)?;

        ctx.primary = Some(primary);
        ctx.map_results = map_results;
        ctx.reducers = reducers;
        Ok(())
    }
}

fn parse_all(raw: &[String]) -> Result<Vec<TypeDescriptor>> {
    raw.iter().map(|r| TypeDescriptor::parse(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, GenerationRequest};

    #[test]
    fn test_parse_phase_populates_descriptors() {
        let mut ctx = GenerationContext::new(GenerationRequest {
            map: vec!["int".to_string(), "os:*os.File".to_string()],
            reduce: vec!["string".to_string()],
            ..GenerationRequest::new("float64", "foo")
        });

        ParsePhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.primary.as_ref().unwrap().name, "Float64");
        let results: Vec<_> = ctx.map_results.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(results, vec!["Int", "OsFile"]);
        assert_eq!(ctx.reducers[0].name, "String");
    }

    #[test]
    fn test_parse_phase_fails_on_bad_secondary() {
        let mut ctx = GenerationContext::new(GenerationRequest {
            reduce: vec!["<-chan int".to_string()],
            ..GenerationRequest::new("float64", "foo")
        });

        let err = ParsePhase.run(&mut ctx).unwrap_err();
        assert!(matches!(*err, Error::InvalidChannelSyntax { .. }));
        assert!(ctx.primary.is_none());
    }
}
