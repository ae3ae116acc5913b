use faultline_manifest::{
    parse_engine_manifest, parse_fault_definition, serialize_engine_manifest,
    serialize_fault_definition, EngineManifest, EnvDecl, FaultDefinition,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_hub_authored_definition_round_trip() {
    let text = r"
apiVersion: chaos.faultline.dev/v1alpha1
kind: FaultDefinition
description:
  message: Injects CPU stress into target pods
metadata:
  name: pod-cpu-hog
  labels:
    app.kubernetes.io/version: 3.0.0
spec:
  definition:
    scope: Namespaced
    image: faultline/runner:latest
    env:
      - name: TOTAL_CHAOS_DURATION
        value: '60'
      - name: CPU_CORES
        value: '1'
      - name: TARGET_PODS
        value: ''
";
    let fault = parse_fault_definition(text).unwrap();
    let rendered = serialize_fault_definition(&fault).unwrap();
    let back = parse_fault_definition(&rendered).unwrap();
    assert_eq!(back, fault);

    // Unmodeled content survives both directions
    assert!(rendered.contains("Injects CPU stress"));
    assert!(rendered.contains("faultline/runner:latest"));
    assert_eq!(back.env().len(), 3);
}

#[test]
fn test_engine_template_round_trip() {
    let text = r"
apiVersion: chaos.faultline.dev/v1alpha1
kind: FaultEngine
metadata:
  namespace: default
spec:
  engineState: active
  experiments:
    - name: pod-cpu-hog
      spec:
        components:
          env:
            - name: TOTAL_CHAOS_DURATION
              value: '60'
";
    let engine = parse_engine_manifest(text).unwrap();
    let rendered = serialize_engine_manifest(&engine).unwrap();
    let back = parse_engine_manifest(&rendered).unwrap();
    assert_eq!(back, engine);
    assert_eq!(back.experiment_env(0), vec![EnvDecl::new("TOTAL_CHAOS_DURATION", "60")]);

    // Unwrapping the document and rewrapping it is lossless
    let rebuilt = EngineManifest::from_value(back.into_value()).unwrap();
    assert_eq!(rebuilt, engine);
}

proptest! {
    #[test]
    fn prop_definition_round_trips(
        name in "[a-z]{1,12}(-[a-z]{1,8}){0,2}",
        env in prop::collection::vec(("[A-Z][A-Z_]{0,15}", "[a-z0-9]{0,12}"), 0..5),
    ) {
        let mut fault = FaultDefinition::default();
        fault.kind = Some("FaultDefinition".to_string());
        fault.metadata.name = Some(name);
        fault.spec.definition.env =
            env.into_iter().map(|(n, v)| EnvDecl::new(n, v)).collect();

        let text = serialize_fault_definition(&fault).unwrap();
        let back = parse_fault_definition(&text).unwrap();
        prop_assert_eq!(back, fault);
    }

    #[test]
    fn prop_skeleton_round_trips(name in "[a-z]{1,12}-[a-z0-9]{3}") {
        let engine = EngineManifest::skeleton(&name);
        let text = serialize_engine_manifest(&engine).unwrap();
        let back = parse_engine_manifest(&text).unwrap();
        prop_assert_eq!(back.experiment_name(0), Some(name.as_str()));
    }
}
