//! Buying and selling with merchants.

use acs_core::entity::strip_article;
use acs_core::{Disposition, Item, Location, Monster, MonsterId, World};

use super::{TurnEngine, TurnReport, capitalize, here, pick, the};
use crate::error::FictionResult;

fn trades(monster: &Monster) -> bool {
    monster.alive && monster.merchant && monster.disposition != Disposition::Hostile
}

/// What a merchant carries but is not using itself.
fn wares<'a>(world: &'a World, merchant: &'a Monster) -> impl Iterator<Item = &'a Item> {
    let location = Location::Monster(merchant.id.clone());
    world.items().filter(move |i| {
        i.location == location
            && merchant.weapon.as_ref() != Some(&i.id)
            && merchant.armor.as_ref() != Some(&i.id)
    })
}

/// The first merchant willing to trade in the player's room.
fn merchant_here(world: &World) -> FictionResult<Option<&Monster>> {
    let room = here(world)?;
    Ok(world.living_monsters_in(&room.id).find(|m| trades(m)))
}

impl TurnEngine {
    pub(super) fn do_trade(
        &self,
        world: &World,
        target: &str,
        report: &mut TurnReport,
    ) -> FictionResult<()> {
        let merchant = if strip_article(target).is_empty() {
            let Some(merchant) = merchant_here(world)? else {
                report.say("There's no merchant here.");
                return Ok(());
            };
            merchant
        } else {
            let room = here(world)?;
            let Some(monster) = pick(world.living_monsters_in(&room.id), |m| m.matches(target), report)
            else {
                report.say("You don't see that here.");
                return Ok(());
            };
            if !trades(monster) {
                report.say(format!("{} doesn't want to trade.", capitalize(&the(&monster.name))));
                return Ok(());
            }
            monster
        };

        let name = capitalize(&the(&merchant.name));
        let stock: Vec<String> = wares(world, merchant)
            .map(|i| format!("  - {} ({} gold)", i.name, i.value))
            .collect();
        if stock.is_empty() {
            report.say(format!("{name} has nothing to trade."));
            return Ok(());
        }
        report.say(format!("{name} has for sale:"));
        report.extend(stock);
        report.say("Use 'buy <item>' or 'sell <item>'.");
        Ok(())
    }

    pub(super) fn do_buy(
        &self,
        world: &mut World,
        target: &str,
        report: &mut TurnReport,
    ) -> FictionResult<()> {
        if strip_article(target).is_empty() {
            report.say("Buy what?");
            return Ok(());
        }
        let Some(merchant) = merchant_here(world)? else {
            report.say("There's no merchant here.");
            return Ok(());
        };
        let seller = merchant.id.clone();
        let merchant_name = capitalize(&the(&merchant.name));
        let found = pick(wares(world, merchant), |i| i.matches(target), report)
            .map(|i| (i.id.clone(), the(&i.name), i.value));
        let Some((id, name, price)) = found else {
            report.say(format!("{merchant_name} doesn't have that for sale."));
            return Ok(());
        };
        if world.player.gold < price {
            report.say(format!("You need {price} gold to buy that."));
            return Ok(());
        }

        world.player.gold -= price;
        pay(world, &seller, price);
        world.move_item(&id, Location::Player);
        tracing::info!(item = %id, price, "bought");
        report.consumed = true;
        report.say(format!("You buy {name} for {price} gold."));
        Ok(())
    }

    pub(super) fn do_sell(
        &self,
        world: &mut World,
        target: &str,
        report: &mut TurnReport,
    ) -> FictionResult<()> {
        if strip_article(target).is_empty() {
            report.say("Sell what?");
            return Ok(());
        }
        let Some(buyer) = merchant_here(world)?.map(|m| m.id.clone()) else {
            report.say("There's no merchant here.");
            return Ok(());
        };
        let found = pick(world.inventory(), |i| i.matches(target), report)
            .map(|i| (i.id.clone(), the(&i.name), i.value / 2));
        let Some((id, name, price)) = found else {
            report.say("You aren't carrying that.");
            return Ok(());
        };

        world.player.gold = world.player.gold.saturating_add(price);
        world.move_item(&id, Location::Monster(buyer));
        tracing::info!(item = %id, price, "sold");
        report.consumed = true;
        report.say(format!("You sell {name} for {price} gold."));
        Ok(())
    }
}

fn pay(world: &mut World, merchant: &MonsterId, price: u32) {
    if let Some(merchant) = world.monster_mut(merchant) {
        merchant.gold = merchant.gold.saturating_add(price);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::{apply, keep};
    use crate::interpreter::Action;
    use acs_core::ItemId;

    /// The keep with the guard turned peddler and the player's purse empty.
    fn market() -> World {
        let mut world = keep();
        world.player.gold = 0;
        let guard = MonsterId::new("guard");
        world.monster_mut(&guard).unwrap().merchant = true;
        world.move_item(&ItemId::new("shield"), Location::Monster(guard));
        world.item_mut(&ItemId::new("shield")).unwrap().value = 10;
        world.item_mut(&ItemId::new("sword")).unwrap().value = 7;
        world
    }

    fn trade(world: &mut World, target: &str) -> Vec<String> {
        apply(
            world,
            Action::Trade {
                target: target.to_string(),
            },
        )
        .lines
    }

    fn buy(world: &mut World, target: &str) -> TurnReport {
        apply(
            world,
            Action::Buy {
                target: target.to_string(),
            },
        )
    }

    fn sell(world: &mut World, target: &str) -> TurnReport {
        apply(
            world,
            Action::Sell {
                target: target.to_string(),
            },
        )
    }

    #[test]
    fn listing_wares() {
        let mut world = market();
        insta::assert_snapshot!(trade(&mut world, "").join("\n"), @r"
        The guard has for sale:
          - oak shield (10 gold)
        Use 'buy <item>' or 'sell <item>'.
        ");
        assert_eq!(trade(&mut world, "the guard")[0], "The guard has for sale:");
        assert_eq!(trade(&mut world, "wren"), vec!["Wren doesn't want to trade."]);
        assert_eq!(trade(&mut world, "dragon"), vec!["You don't see that here."]);
        assert_eq!(trade(&mut keep(), ""), vec!["There's no merchant here."]);
    }

    #[test]
    fn merchant_keeps_its_own_gear() {
        let mut world = market();
        let guard = MonsterId::new("guard");
        world.monster_mut(&guard).unwrap().armor = Some(ItemId::new("shield"));
        assert_eq!(trade(&mut world, "guard"), vec!["The guard has nothing to trade."]);
        assert_eq!(
            buy(&mut world, "shield").lines,
            vec!["The guard doesn't have that for sale."]
        );
    }

    #[test]
    fn buying_costs_gold() {
        let mut world = market();
        assert_eq!(buy(&mut world, "").lines, vec!["Buy what?"]);
        let report = buy(&mut world, "shield");
        assert_eq!(report.lines, vec!["You need 10 gold to buy that."]);
        assert!(!report.consumed);

        world.player.gold = 15;
        let report = buy(&mut world, "the shield");
        assert_eq!(report.lines, vec!["You buy the oak shield for 10 gold."]);
        assert!(report.consumed);
        assert_eq!(world.player.gold, 5);
        assert_eq!(world.monster(&MonsterId::new("guard")).unwrap().gold, 10);
        assert!(world.player_has(&ItemId::new("shield")));
        assert_eq!(buy(&mut keep(), "shield").lines, vec!["There's no merchant here."]);
    }

    #[test]
    fn selling_pays_half() {
        let mut world = market();
        assert_eq!(sell(&mut world, "sword").lines, vec!["You aren't carrying that."]);
        apply(
            &mut world,
            Action::Take {
                target: "sword".to_string(),
            },
        );
        let report = sell(&mut world, "sword");
        assert_eq!(report.lines, vec!["You sell the short sword for 3 gold."]);
        assert!(report.consumed);
        assert_eq!(world.player.gold, 3);
        assert_eq!(
            world.item(&ItemId::new("sword")).unwrap().location,
            Location::Monster(MonsterId::new("guard"))
        );
        assert!(trade(&mut world, "").contains(&"  - short sword (7 gold)".to_string()));
    }

    #[test]
    fn hostile_merchants_refuse() {
        let mut world = market();
        world.monster_mut(&MonsterId::new("guard")).unwrap().disposition = Disposition::Hostile;
        assert_eq!(trade(&mut world, "guard"), vec!["The guard doesn't want to trade."]);
        world.player.gold = 50;
        assert_eq!(buy(&mut world, "shield").lines, vec!["There's no merchant here."]);
    }
}
