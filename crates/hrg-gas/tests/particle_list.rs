use hrg_core::PdgCode;
use hrg_gas::serde::particle_list_from_json;
use hrg_gas::QuantumStatistics;

#[test]
fn particle_list_parses_with_defaults() {
    let payload = br#"[
        {
            "pdg": 211,
            "name": "pi+",
            "mass": 0.13957,
            "degeneracy": 1.0,
            "statistics": "bose-einstein",
            "stable": true
        },
        {
            "pdg": 113,
            "name": "rho0",
            "mass": 0.77526,
            "degeneracy": 3.0,
            "decays": [
                { "branching_ratio": 1.0, "daughters": [211, -211] }
            ]
        }
    ]"#;
    let inputs = particle_list_from_json(payload).unwrap();
    assert_eq!(inputs.len(), 2);

    let pion = &inputs[0];
    assert_eq!(pion.pdg, PdgCode::from_raw(211));
    assert_eq!(pion.statistics, QuantumStatistics::BoseEinstein);
    assert!(pion.stable);
    assert!(pion.decays.is_empty());

    let rho = &inputs[1];
    assert_eq!(rho.statistics, QuantumStatistics::Boltzmann);
    assert!(!rho.stable);
    assert_eq!(rho.baryon, 0);
    assert_eq!(rho.strangeness, 0);
    assert_eq!(rho.decays.len(), 1);
    assert_eq!(rho.decays[0].daughters.len(), 2);
}

#[test]
fn unknown_statistics_are_rejected() {
    let payload = br#"[
        {
            "pdg": 211,
            "name": "pi+",
            "mass": 0.13957,
            "degeneracy": 1.0,
            "statistics": "maxwellian"
        }
    ]"#;
    let err = particle_list_from_json(payload).unwrap_err();
    assert_eq!(err.code(), "json_deserialize");
}
