use creation_recipe::family_factory::{
    factory_for, ExtensibleFactory, FactoryError, FamilyFactory, GuiFactory, WinFactory,
};
use creation_recipe::framework::{Capability, FamilyTag, Widget};
use creation_recipe::model::{MacButton, Slider};

/// Every member produced by one family factory carries that family's tag.
#[test]
fn test_family_members_are_compatible() {
    for family in FamilyTag::ALL {
        let factory = factory_for(family);

        let button = factory.create_button();
        let checkbox = factory.create_checkbox();
        assert_eq!(button.family(), family);
        assert_eq!(checkbox.family(), family);

        for capability in factory.capabilities().to_vec() {
            let member = factory.create_member(capability).unwrap();
            assert_eq!(member.family(), family);
            assert_eq!(member.capability(), capability);
        }
    }
}

#[test]
fn test_identities_follow_family_prefix() {
    let win = factory_for(FamilyTag::Windows);
    let mac = factory_for(FamilyTag::Mac);

    assert_eq!(win.create_button().identify(), "Win Button");
    assert_eq!(win.create_checkbox().identify(), "Win Checkbox");
    assert_eq!(mac.create_button().identify(), "Mac Button");
    assert_eq!(mac.create_checkbox().show_name(), "<> Initialize Mac Checkbox");
}

/// Each call hands out a fresh product with its own state.
#[test]
fn test_products_are_independent() {
    let factory = factory_for(FamilyTag::Mac);
    let mut first = factory.create_checkbox();
    let second = factory.create_checkbox();

    assert!(first.toggle());
    assert!(first.is_checked());
    assert!(!second.is_checked());
}

#[test]
fn test_builtin_family_rejects_undeclared_capability() {
    let err = WinFactory.create_member(Capability::Slider).unwrap_err();
    assert_eq!(
        err,
        FactoryError::UnsupportedCapability {
            family: FamilyTag::Windows,
            capability: Capability::Slider,
        }
    );
}

#[test]
fn test_open_family_extension() {
    let factory = ExtensibleFactory::new(FamilyTag::Windows)
        .with_builtin_members()
        .with_member(Capability::Slider, |family| Box::new(Slider::new(family)));

    assert!(factory.supports(Capability::Slider));
    let slider = factory.create_member(Capability::Slider).unwrap();
    assert_eq!(slider.identify(), "Win Slider");
    assert_eq!(slider.family(), FamilyTag::Windows);
}

/// A constructor that builds a product of another family is caught.
#[test]
fn test_open_family_catches_mismatched_member() {
    let factory = ExtensibleFactory::new(FamilyTag::Windows)
        .with_member(Capability::Button, |_| Box::new(MacButton));

    let err = factory.create_member(Capability::Button).unwrap_err();
    assert_eq!(
        err,
        FactoryError::FamilyMismatch {
            expected: FamilyTag::Windows,
            actual: FamilyTag::Mac,
        }
    );
}

/// Factories are shareable across threads.
#[tokio::test(flavor = "multi_thread")]
async fn test_factory_shared_between_tasks() {
    let factory: std::sync::Arc<dyn GuiFactory> = std::sync::Arc::from(factory_for(FamilyTag::Mac));

    let mut handles = vec![];
    for _ in 0..8 {
        let factory = factory.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            factory.create_button().identify()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), "Mac Button");
    }
}
