use creation_recipe::car_builder::{BuildError, CarBuilder, CarDirector, DirectorError, SuvBuilder};
use creation_recipe::framework::mock::MockBuilder;
use creation_recipe::model::{BuildStage, BuildStep, CarVariant};

/// Director + mocked builder.
///
/// The mock fails on any call that does not match the next expectation, so
/// this proves the director runs seat, engine, computer in that order and
/// then retrieves exactly once.
#[test]
fn test_director_follows_sequence() {
    let mut mock = MockBuilder::new();
    for step in BuildStep::SEQUENCE {
        mock.expect_step(step).writes(format!("Mock {step}"));
    }
    mock.expect_retrieve();

    let mut director = CarDirector::with_builder(mock.builder());
    let car = director.construct().unwrap();

    assert_eq!(car.seat(), Some("Mock seat"));
    assert_eq!(car.engine(), Some("Mock engine"));
    assert_eq!(car.computer(), Some("Mock computer"));
    mock.verify();
}

#[test]
fn test_builder_determinism() {
    for variant in [CarVariant::Sedan, CarVariant::Suv] {
        let mut director = CarDirector::with_builder(variant.builder());
        let car = director.construct().unwrap();

        assert_eq!(car.seat(), Some(format!("{variant} Seat").as_str()));
        assert_eq!(car.engine(), Some(format!("{variant} Engine").as_str()));
        assert_eq!(car.computer(), Some(format!("{variant} Computer").as_str()));
    }
}

#[test]
fn test_director_without_builder() {
    let mut director = CarDirector::new();
    assert_eq!(director.construct(), Err(DirectorError::NoBuilderAttached));
}

/// A builder can be driven again after its product was retrieved.
#[test]
fn test_builder_is_reusable_after_retrieve() {
    let mut director = CarDirector::with_builder(Box::new(SuvBuilder::new()));
    let first = director.construct().unwrap();
    let second = director.construct().unwrap();
    assert_eq!(first, second);

    let mut builder = director.detach().unwrap();
    assert_eq!(builder.peek().stage(), BuildStage::Empty);
    builder.build_seat();
    assert_eq!(builder.peek().stage(), BuildStage::SeatSet);
}

#[test]
fn test_partial_retrieval() {
    let mut builder = CarVariant::Sedan.builder();
    builder.build_seat();
    builder.build_seat();

    assert_eq!(
        builder.retrieve_complete(),
        Err(BuildError::Incomplete {
            missing: vec![BuildStep::Engine, BuildStep::Computer],
        })
    );

    let car = builder.retrieve_product();
    assert_eq!(car.to_string(), "Sedan Seat --> <unset> --> <unset>");
}
