//! Client, server and config script sources.
//!
//! Sources are static text with `{{TOKEN}}` placeholders, filled through
//! [`Substitutions::apply`]. Optional fragments use local markers that are
//! replaced first.

use fxp_core::domain::{Framework, ScriptLanguage, Substitutions, TemplateDescriptor};

/// Replace local `markers`, then the standard tokens.
pub(crate) fn fill(source: &str, markers: &[(&str, &str)], subs: &Substitutions) -> String {
    let text = markers
        .iter()
        .fold(source.to_string(), |acc, (marker, value)| {
            acc.replace(marker, value)
        });
    subs.apply(&text)
}

// ── Client ───────────────────────────────────────────────────────────────────

const CLIENT_LUA: &str = r#"-- {{RESOURCE_NAME}} Client Script
-- Author: {{AUTHOR}}
{{PRELUDE}}
-- Event Handlers
RegisterNetEvent('{{RESOURCE_NAME}}:client:example', function(data)
    print('Client event received:', json.encode(data))
end)

-- Key Mapping (Optional)
RegisterKeyMapping('{{RESOURCE_NAME}}', 'Open {{RESOURCE_NAME}}', 'keyboard', 'F6')

-- Command Handler
RegisterCommand('{{RESOURCE_NAME}}', function(source, args, rawCommand)
    {{NOTIFY}}
end, false)

-- Initialize
CreateThread(function()
    print('^2[{{RESOURCE_NAME}}]^7 Client script loaded')
end)
"#;

const CLIENT_JS: &str = r#"// {{RESOURCE_NAME}} Client Script
// Author: {{AUTHOR}}

onNet('{{RESOURCE_NAME}}:client:example', (data) => {
    console.log('Client event received:', JSON.stringify(data));
});

RegisterKeyMapping('{{RESOURCE_NAME}}', 'Open {{RESOURCE_NAME}}', 'keyboard', 'F6');

RegisterCommand('{{RESOURCE_NAME}}', (source, args, rawCommand) => {
    console.log('Command executed!');
}, false);

setTick(() => {});
console.log('^2[{{RESOURCE_NAME}}]^7 Client script loaded');
"#;

const REDM_CLIENT_LUA: &str = r#"-- {{RESOURCE_NAME}} RedM Client Script
-- Author: {{AUTHOR}}
{{PRELUDE}}
-- RedM specific initialization
CreateThread(function()
    print('^2[{{RESOURCE_NAME}}]^7 RedM client script loaded')
end)

-- Event Handlers
RegisterNetEvent('{{RESOURCE_NAME}}:client:example', function(data)
    print('Client event received:', json.encode(data))
end)

-- Key Mapping
RegisterKeyMapping('{{RESOURCE_NAME}}', 'Open {{RESOURCE_NAME}}', 'keyboard', 'F6')

-- Command Handler
RegisterCommand('{{RESOURCE_NAME}}', function(source, args, rawCommand)
    print('RedM command executed!')
end, false)
"#;

pub(crate) fn client(subs: &Substitutions) -> String {
    match subs.language {
        ScriptLanguage::Lua => {
            let notify = if subs.use_ox_lib {
                "lib.notify({ type = 'info', description = 'Command executed!' })"
            } else {
                "print('Command executed!')"
            };
            fill(
                CLIENT_LUA,
                &[("{{PRELUDE}}", prelude(subs.framework)), ("{{NOTIFY}}", notify)],
                subs,
            )
        }
        ScriptLanguage::JavaScript => fill(CLIENT_JS, &[], subs),
    }
}

pub(crate) fn redm_client(subs: &Substitutions) -> String {
    match subs.language {
        ScriptLanguage::Lua => fill(
            REDM_CLIENT_LUA,
            &[("{{PRELUDE}}", prelude(subs.framework))],
            subs,
        ),
        ScriptLanguage::JavaScript => fill(CLIENT_JS, &[], subs),
    }
}

/// Core-object lookup placed at the top of Lua scripts.
fn prelude(framework: Option<Framework>) -> &'static str {
    match framework {
        Some(Framework::QbCore) => "\nlocal QBCore = exports['qb-core']:GetCoreObject()\n",
        Some(Framework::Rsg) => "\nlocal RSGCore = exports['rsg-core']:GetCoreObject()\n",
        _ => "",
    }
}

// ── Server ───────────────────────────────────────────────────────────────────

const SERVER_LUA: &str = r#"-- {{RESOURCE_NAME}} Server Script
-- Author: {{AUTHOR}}
{{PRELUDE}}
-- Event Handlers
RegisterNetEvent('{{RESOURCE_NAME}}:server:example', function(data)
    local source = source
    print('Server event received from player:', source, json.encode(data))

    -- Trigger client event back
    TriggerClientEvent('{{RESOURCE_NAME}}:client:example', source, {
        message = 'Response from server'
    })
end)

-- Server Commands
RegisterCommand('{{RESOURCE_NAME}}admin', function(source, args, rawCommand)
    if source == 0 then -- Console
        print('Admin command executed from console')
    else
        print('Admin command executed by player:', source)
    end
end, true)

-- Resource Start
AddEventHandler('onResourceStart', function(resourceName)
    if GetCurrentResourceName() == resourceName then
        print('^2[{{RESOURCE_NAME}}]^7 Server script loaded')
{{DATABASE}}
    end
end)
"#;

const DATABASE_LUA: &str = r#"
        -- Database initialization example
        MySQL.ready(function()
            MySQL.query([[
                CREATE TABLE IF NOT EXISTS `{{RESOURCE_NAME}}_data` (
                    `id` int(11) NOT NULL AUTO_INCREMENT,
                    `identifier` varchar(60) NOT NULL,
                    `data` longtext NOT NULL,
                    `created_at` timestamp NOT NULL DEFAULT CURRENT_TIMESTAMP,
                    PRIMARY KEY (`id`),
                    UNIQUE KEY `identifier` (`identifier`)
                ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;
            ]])
        end)"#;

const SERVER_JS: &str = r#"// {{RESOURCE_NAME}} Server Script
// Author: {{AUTHOR}}

onNet('{{RESOURCE_NAME}}:server:example', (data) => {
    const src = global.source;
    console.log('Server event received from player:', src, JSON.stringify(data));

    emitNet('{{RESOURCE_NAME}}:client:example', src, {
        message: 'Response from server',
    });
});

RegisterCommand('{{RESOURCE_NAME}}admin', (source, args, rawCommand) => {
    console.log(source === 0 ? 'Admin command executed from console' : `Admin command executed by player: ${source}`);
}, true);

on('onResourceStart', (resourceName) => {
    if (GetCurrentResourceName() === resourceName) {
        console.log('^2[{{RESOURCE_NAME}}]^7 Server script loaded');
    }
});
"#;

const REDM_SERVER_LUA: &str = r#"-- {{RESOURCE_NAME}} RedM Server Script
-- Author: {{AUTHOR}}
{{PRELUDE}}
-- Event Handlers
RegisterNetEvent('{{RESOURCE_NAME}}:server:example', function(data)
    local source = source
    print('Server event received from player:', source, json.encode(data))

    TriggerClientEvent('{{RESOURCE_NAME}}:client:example', source, {
        message = 'Response from RedM server'
    })
end)

-- Resource Start
AddEventHandler('onResourceStart', function(resourceName)
    if GetCurrentResourceName() == resourceName then
        print('^2[{{RESOURCE_NAME}}]^7 RedM server script loaded')
    end
end)
"#;

pub(crate) fn server(subs: &Substitutions) -> String {
    match subs.language {
        ScriptLanguage::Lua => {
            let database = if subs.use_oxmysql {
                DATABASE_LUA
            } else {
                "        -- No database setup"
            };
            fill(
                SERVER_LUA,
                &[
                    ("{{PRELUDE}}", prelude(subs.framework)),
                    ("{{DATABASE}}", database),
                ],
                subs,
            )
        }
        ScriptLanguage::JavaScript => fill(SERVER_JS, &[], subs),
    }
}

pub(crate) fn redm_server(subs: &Substitutions) -> String {
    match subs.language {
        ScriptLanguage::Lua => fill(
            REDM_SERVER_LUA,
            &[("{{PRELUDE}}", prelude(subs.framework))],
            subs,
        ),
        ScriptLanguage::JavaScript => fill(SERVER_JS, &[], subs),
    }
}

// ── Shared config ────────────────────────────────────────────────────────────

const CONFIG_LUA: &str = r#"Config = {}

Config.Locale = 'en'
{{FRAMEWORK_SETTINGS}}
-- Add your configuration options here
Config.Settings = {
    enableFeature = true,
    maxAmount = 100,
    cooldown = 5000 -- milliseconds
}
"#;

const CONFIG_JS: &str = r#"const Config = {
    locale: 'en',
    debug: false,
    settings: {
        enableFeature: true,
        maxAmount: 100,
        cooldown: 5000, // milliseconds
    },
};

globalThis.Config = Config;
"#;

pub(crate) fn config(subs: &Substitutions) -> String {
    match subs.language {
        ScriptLanguage::Lua => {
            let settings = match subs.framework {
                Some(Framework::Esx) => "Config.UseESXNotify = true\nConfig.EnableDebug = false\n",
                Some(Framework::QbCore | Framework::Qbox) => {
                    "Config.UseTarget = GetConvar('UseTarget', 'false') == 'true'\nConfig.Debug = false\n"
                }
                _ => "Config.Debug = false\n",
            };
            fill(CONFIG_LUA, &[("{{FRAMEWORK_SETTINGS}}", settings)], subs)
        }
        ScriptLanguage::JavaScript => CONFIG_JS.to_string(),
    }
}

// ── Locales and docs ─────────────────────────────────────────────────────────

pub(crate) fn locales() -> String {
    let value = serde_json::json!({
        "command_usage": "Usage: /%s [args]",
        "command_executed": "Command executed successfully",
        "error_occurred": "An error occurred",
        "success": "Success!"
    });
    // Serializing a literal object cannot fail.
    serde_json::to_string_pretty(&value).unwrap_or_default() + "\n"
}

const README: &str = r#"# {{RESOURCE_NAME}}

{{DESCRIPTION}}

Template: {{TEMPLATE}}
Framework: {{FRAMEWORK}}

## Features

{{FEATURES}}

## Installation

1. Download and extract to your resources folder
2. Add `ensure {{RESOURCE_NAME}}` to your server.cfg
3. Restart your server

## Usage

- Use `/{{RESOURCE_NAME}}` command in-game
- Press F6 to open (configurable)

## Configuration

Edit `shared/config.{{LANGUAGE}}` as needed.
"#;

pub(crate) fn readme(descriptor: &TemplateDescriptor, subs: &Substitutions) -> String {
    let features = if descriptor.features.is_empty() {
        "- Basic structure".to_string()
    } else {
        descriptor
            .features
            .iter()
            .map(|f| format!("- {f}"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    fill(
        README,
        &[("{{TEMPLATE}}", descriptor.name), ("{{FEATURES}}", &features)],
        subs,
    )
}
