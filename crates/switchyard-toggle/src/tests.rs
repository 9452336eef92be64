#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::*;

    type Log<T> = Rc<RefCell<Vec<T>>>;

    fn log<T>() -> Log<T> {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn recording_config(toggles: &Log<bool>, changes: &Log<ToggleChanges>) -> ToggleConfig {
        let (t, c) = (toggles.clone(), changes.clone());
        ToggleConfig::new()
            .on_toggle(move |on| t.borrow_mut().push(on))
            .on_state_change(move |changes, _| c.borrow_mut().push(changes.clone()))
    }

    #[test]
    fn uncontrolled_toggle_flips_and_reports() {
        let (toggles, changes) = (log(), log());
        let toggle = Toggle::new(recording_config(&toggles, &changes).initial_on(false));

        toggle.toggle();

        assert_eq!(*toggles.borrow(), vec![true]);
        assert!(toggle.state().on);
        assert!(toggle.internal_state().on);
        assert_eq!(
            *changes.borrow(),
            vec![ToggleChanges::new(ChangeType::Toggle, TogglePatch::on(true))]
        );
    }

    #[test]
    fn controlled_toggle_reports_would_be_value() {
        let (toggles, changes) = (log(), log());
        let toggle = Toggle::new(recording_config(&toggles, &changes).on(Some(true)));

        toggle.toggle();

        assert!(toggle.state().on);
        assert_eq!(*toggles.borrow(), vec![false]);
        assert_eq!(
            *changes.borrow(),
            vec![ToggleChanges::new(ChangeType::Toggle, TogglePatch::on(false))]
        );
        assert!(!toggle.internal_state().on);
    }

    #[test]
    fn reducer_can_pin_the_toggle_on() {
        let (toggles, changes) = (log(), log());
        let toggle = Toggle::new(recording_config(&toggles, &changes).state_reducer(
            |_state, mut changes| {
                changes.patch.on = Some(true);
                changes
            },
        ));

        toggle.toggle();
        toggle.toggle();

        assert!(toggle.state().on);
        assert_eq!(*toggles.borrow(), vec![true, true]);
        let json = serde_json::to_string(&changes.borrow()[1]).unwrap();
        insta::assert_snapshot!(json, @r#"{"type":"toggle","on":true}"#);
    }

    #[test]
    fn reducer_sees_merged_state() {
        let seen = log();
        let s = seen.clone();
        let toggle = Toggle::new(ToggleConfig::controlled(true).state_reducer(move |state, changes| {
            s.borrow_mut().push(*state);
            changes
        }));

        toggle.toggle();

        assert_eq!(*seen.borrow(), vec![ToggleState { on: true }]);
    }

    #[test]
    fn subscribers_of_one_commit_share_the_value() {
        let provider = ToggleProvider::new(ToggleConfig::new());
        let (a, b): (Log<Rc<ToggleValue>>, Log<Rc<ToggleValue>>) = (log(), log());
        let (a2, b2) = (a.clone(), b.clone());
        provider.subscribe(move |v| a2.borrow_mut().push(v.clone()));
        provider.subscribe(move |v| b2.borrow_mut().push(v.clone()));

        provider.toggle().toggle();

        let (a, b) = (a.borrow(), b.borrow());
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert!(Rc::ptr_eq(&a[0], &b[0]));
        assert!(Rc::ptr_eq(&a[0], &provider.value()));
        assert!(a[0].on());
    }

    #[test]
    fn override_wins_over_internal_storage() {
        let toggle = Toggle::default();
        toggle.toggle();
        assert!(toggle.internal_state().on);

        toggle.set_on(Some(false));
        assert!(!toggle.state().on);
        assert!(toggle.is_controlled(ToggleSchema::ON));

        toggle.set_on(None);
        assert!(toggle.state().on);
        assert!(!toggle.is_controlled(ToggleSchema::ON));
    }

    #[test]
    fn every_toggle_notifies_once() {
        let (toggles, changes) = (log(), log());
        let toggle = Toggle::new(recording_config(&toggles, &changes).on(Some(false)));

        toggle.toggle();
        toggle.toggle();

        let changes = changes.borrow();
        assert_eq!(changes.len(), 2);
        assert!(changes.iter().all(|c| c.is(&ChangeType::Toggle)));
        assert!(changes.iter().all(|c| c.patch.on == Some(true)));
    }

    #[test]
    fn reset_restores_initial_and_is_idempotent() {
        let resets = log();
        let r = resets.clone();
        let toggle = Toggle::new(
            ToggleConfig::new()
                .initial_on(true)
                .on_reset(move |on| r.borrow_mut().push(on)),
        );

        toggle.toggle();
        assert!(!toggle.state().on);

        toggle.reset();
        assert!(toggle.state().on);
        toggle.reset();
        assert!(toggle.state().on);
        assert_eq!(*resets.borrow(), vec![true, true]);
    }

    #[test]
    fn controlled_reset_notifies_without_mutating() {
        let (resets, changes) = (log(), log());
        let (r, c) = (resets.clone(), changes.clone());
        let toggle = Toggle::new(
            ToggleConfig::new()
                .initial_on(true)
                .on_reset(move |on| r.borrow_mut().push(on))
                .on_state_change(move |changes, _| c.borrow_mut().push(changes.clone())),
        );
        toggle.toggle();
        toggle.set_on(Some(false));

        toggle.reset();

        assert_eq!(
            changes.borrow().last(),
            Some(&ToggleChanges::new(ChangeType::Reset, TogglePatch::on(true)))
        );
        assert!(!toggle.internal_state().on);
        assert!(!toggle.state().on);
        assert_eq!(*resets.borrow(), vec![true]);
    }

    #[test]
    fn caller_click_runs_before_toggle() {
        let order: Log<String> = log();
        let (o1, o2) = (order.clone(), order.clone());
        let toggle = Toggle::new(ToggleConfig::new().on_state_change(move |changes, _| {
            o2.borrow_mut().push(format!("toggle:{}", changes.kind.as_ref().unwrap()));
        }));

        let props = toggle.toggler_props(
            PropOverrides::new().on_click(move |e| o1.borrow_mut().push(format!("caller:{}", e.x))),
        );
        props.click(&ClickEvent::at(3.0, 4.0));

        assert_eq!(*order.borrow(), vec!["caller:3", "toggle:toggle"]);
        assert!(toggle.state().on);
    }

    #[test]
    fn toggler_props_reflect_merged_state() {
        let toggle = Toggle::new(ToggleConfig::controlled(true));
        assert!(toggle.toggler_props(PropOverrides::new()).aria_pressed);

        toggle.set_on(Some(false));
        let props = toggle.toggler_props(PropOverrides::new().prop("id", "wifi"));
        assert!(!props.aria_pressed);
        assert_eq!(props.get("id").and_then(PropValue::as_str), Some("wifi"));
    }

    #[test]
    fn custom_change_type_reaches_observers() {
        let (toggles, changes) = (log(), log());
        let toggle = Toggle::new(recording_config(&toggles, &changes));

        toggle.toggle_with(ChangeType::custom("swipe").into());

        assert!(changes.borrow()[0].is(&ChangeType::custom("swipe")));
        assert_eq!(*toggles.borrow(), vec![true]);
    }

    #[test]
    fn controlled_only_commit_publishes_nothing() {
        let toggle = Toggle::new(ToggleConfig::controlled(false));
        let before = toggle.value();
        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        toggle.subscribe(move |_| *h.borrow_mut() += 1);

        toggle.toggle();
        assert_eq!(*hits.borrow(), 0);
        assert!(Rc::ptr_eq(&before, &toggle.value()));

        toggle.set_on(Some(true));
        assert_eq!(*hits.borrow(), 1);
        assert!(toggle.value().on());
    }

    #[test]
    fn overrides_matching_merged_state_publish_nothing() {
        let toggle = Toggle::new(ToggleConfig::new().initial_on(true));
        let before = toggle.value();
        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        toggle.subscribe(move |_| *h.borrow_mut() += 1);

        toggle.set_on(Some(true));
        assert_eq!(*hits.borrow(), 0);
        assert!(Rc::ptr_eq(&before, &toggle.value()));
        assert!(toggle.is_controlled(ToggleSchema::ON));

        toggle.set_on(Some(false));
        toggle.set_on(Some(false));
        assert_eq!(*hits.borrow(), 1);
        assert!(!toggle.value().on());
    }

    #[test]
    fn one_owner_drives_two_toggles() {
        let pair: Log<ToggleApi> = log();
        let make = |pair: &Log<ToggleApi>| {
            let pair = pair.clone();
            Toggle::new(ToggleConfig::controlled(false).on_toggle(move |on| {
                for api in pair.borrow().iter() {
                    if let Some(t) = api.upgrade() {
                        t.set_on(Some(on));
                    }
                }
            }))
        };
        let first = make(&pair);
        let second = make(&pair);
        pair.borrow_mut().extend([first.api(), second.api()]);

        first.toggle();
        assert!(first.state().on);
        assert!(second.state().on);

        second.toggle();
        assert!(!first.state().on);
        assert!(!second.state().on);
        assert!(!first.internal_state().on);
    }

    #[test]
    fn render_prop_sees_state_and_helpers() {
        let toggle = Toggle::default();

        let was_on = toggle.render(|value| {
            value.toggle();
            value.on()
        });

        assert!(!was_on);
        assert!(toggle.state().on);
        assert!(toggle.render(|value| value.on()));
    }

    #[test]
    fn observer_may_reset_during_notification() {
        let (toggles, changes) = (log(), log());
        let c = changes.clone();
        let toggle = Toggle::new(recording_config(&toggles, &log()).on_state_change(
            move |changes: &ToggleChanges, value: &ToggleValue| {
                c.borrow_mut().push(changes.kind.clone());
                if changes.is(&ChangeType::Toggle) {
                    value.reset();
                }
            },
        ));

        toggle.toggle();

        assert!(!toggle.state().on);
        assert_eq!(
            *changes.borrow(),
            vec![Some(ChangeType::Toggle), Some(ChangeType::Reset)]
        );
        assert_eq!(*toggles.borrow(), vec![false]);
    }

    #[test]
    fn handles_outlive_the_toggle_quietly() {
        let toggle = Toggle::new(ToggleConfig::new().initial_on(true));
        let api = toggle.api();
        let value = toggle.value();
        drop(toggle);

        assert!(!api.is_alive());
        api.toggle();
        api.reset();
        assert!(api.toggler_props(PropOverrides::new()).is_none());
        assert!(value.toggler_props(PropOverrides::new()).aria_pressed);
    }

    #[test]
    fn use_toggle_requires_a_provider() {
        assert!(matches!(use_toggle(), Err(Error::MissingProvider { .. })));

        let provider = ToggleProvider::new(ToggleConfig::new());
        provider.provide(|| {
            assert!(!use_toggle().unwrap().on());
            use_toggle_handle().unwrap().toggle();
            assert!(use_toggle().unwrap().on());
        });

        assert!(provider.value().on());
        assert!(use_toggle().is_err());
    }

    #[test]
    fn controlled_lookup_by_field_name() {
        let toggle = Toggle::new(ToggleConfig::controlled(false));
        assert_eq!(toggle.is_controlled_named("on"), Ok(true));
        assert!(matches!(
            toggle.is_controlled_named("checked"),
            Err(Error::UnknownField { .. })
        ));
    }
}
