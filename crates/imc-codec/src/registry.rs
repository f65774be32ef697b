//! Explicit registration of the default set of codecs.
//!
//! Called once from the CLI's `main`, replacing the source tool's
//! static-initializer registry with a plain function call.

use imc_core::CodecRegistry;

use crate::bcg::{BcgReader, BcgWriter};
use crate::ctmdp::{CtmdpWriter, CtmdpiWriter};
use crate::etmcc::EtmccWriter;
use crate::lab::LabWriter;
use crate::marked::MarkedWriter;
use crate::prism::PrismReader;

pub fn register_default_codecs(registry: &mut CodecRegistry) {
    registry.register_reader("bcg", Box::new(BcgReader));
    registry.register_writer("bcg", Box::new(BcgWriter));

    registry.register_reader("prism", Box::new(PrismReader));

    registry.register_writer("ctmdp", Box::new(CtmdpWriter));
    registry.register_writer("ctmdpi", Box::new(CtmdpiWriter));
    registry.register_writer("etmcc", Box::new(EtmccWriter));
    registry.register_writer("lab", Box::new(LabWriter));
    registry.register_writer("marked", Box::new(MarkedWriter));
}

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn registers_every_default_format() {
        let mut registry = CodecRegistry::new();
        register_default_codecs(&mut registry);
        let reads: Vec<_> = registry.read_formats().collect();
        let writes: Vec<_> = registry.write_formats().collect();
        assert!(reads.contains(&"bcg"));
        assert!(reads.contains(&"prism"));
        assert!(writes.contains(&"ctmdp"));
        assert!(writes.contains(&"ctmdpi"));
        assert!(writes.contains(&"etmcc"));
        assert!(writes.contains(&"lab"));
        assert!(writes.contains(&"marked"));
    }
}
