use std::rc::Rc;

use switchyard_core::Broadcast;
use switchyard_toggle::*;

/// Two switches that always agree: both are controlled by one owner value,
/// and each reports its would-be state back to that owner.
fn controlled_pair() -> anyhow::Result<()> {
    let both_on = Broadcast::new(false);

    let make = |name: &'static str| {
        let owner = both_on.clone();
        let toggle = Toggle::new(
            ToggleConfig::controlled(false)
                .on_toggle(move |on| {
                    log::info!("{name} asks for on={on}");
                    owner.publish(on);
                })
                .on_state_change(move |changes, value| {
                    log::debug!("{name}: {:?} (showing on={})", changes, value.on());
                }),
        );
        toggle.subscribe(move |value| log::info!("{name} renders on={}", value.on()));
        toggle
    };
    let left = make("left");
    let right = make("right");

    for api in [left.api(), right.api()] {
        both_on.subscribe(move |on| {
            if let Some(t) = api.upgrade() {
                t.set_on(Some(**on));
            }
        });
    }

    left.toggler_props(PropOverrides::new())
        .click(&ClickEvent::at(10.0, 10.0));
    right
        .toggler_props(
            PropOverrides::new().on_click(|e| {
                log::info!("right clicked by {:?} at {},{}", e.kind, e.x, e.y)
            }),
        )
        .click(&ClickEvent::at(40.0, 10.0));

    anyhow::ensure!(left.on() == right.on(), "controlled pair diverged");
    log::info!("pair settled at on={}", left.on());
    Ok(())
}

/// Deeply nested consumers reading one provided toggle.
fn provided_layers() -> anyhow::Result<()> {
    let provider = ToggleProvider::new(
        ToggleConfig::new().on_toggle(|on| log::info!("provided toggle on={on}")),
    );

    let layer4 = || -> anyhow::Result<Rc<ToggleValue>> {
        let value = use_toggle()?;
        value.toggle();
        Ok(value)
    };
    let layer2 = || -> anyhow::Result<()> {
        let before = use_toggle()?;
        if before.on() {
            log::info!("The button is on");
        } else {
            log::info!("The button is off");
        }
        let seen = layer4()?;
        let after = use_toggle()?;
        log::info!("layer 4 saw on={}, now on={}", seen.on(), after.on());
        Ok(())
    };

    provider.provide(layer2)?;

    if let Err(e) = use_toggle() {
        log::warn!("outside the provider: {e}");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    controlled_pair()?;
    provided_layers()
}
