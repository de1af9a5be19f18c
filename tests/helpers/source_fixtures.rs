//! Common Pawn source fixtures for tests.

/// A small include with natives, a stock, an enum and constants.
pub const PLAYER_INC: &str = r#"#if defined _player_included
    #endinput
#endif
#define _player_included

#define MAX_PLAYER_NAME 24
#define IsValid(%0) ((%0) != INVALID_ID)

const INVALID_ID = -1;

enum E_PLAYER {
    E_ID,
    E_NAME[MAX_PLAYER_NAME],
    Float:E_HEALTH
}

/**
 * Kick a player from the server.
 */
native Kick(playerid);
native SetTimer(const callback[], interval);

stock Float:GetHealth(playerid, bool:clamp = true) {
    new Float:health = 100.0;
    return health;
}

static stock Helper() {}
static gInternal;
"#;

/// A script including [`PLAYER_INC`] as `player`.
pub const GAMEMODE: &str = r#"#include <player>

new gPlayers[64][E_PLAYER]; // roster

forward OnTick();

public OnTick() {
    SetTimer("OnTick", 1000);
}

main() {
    new count = 0;
    for (new i = 0; i < 64; i++) {
        Kick(i);
        count++;
    }
    GetHealth(count, false);
}
"#;
