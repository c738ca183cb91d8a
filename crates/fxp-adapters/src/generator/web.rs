//! NUI page and the client script that drives it.

use fxp_core::domain::{ScriptLanguage, Substitutions};

use super::scripts::fill;

pub(crate) const UI_PAGE: &str = "web/index.html";

/// Files under `web/`, relative to the resource root, in manifest order.
pub(crate) const WEB_FILES: [&str; 3] = ["web/index.html", "web/style.css", "web/script.js"];

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{RESOURCE_NAME}}</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <div id="app" class="hidden">
        <div class="container">
            <div class="header">
                <h1>{{RESOURCE_NAME}}</h1>
                <button id="closeBtn" class="close-btn">&times;</button>
            </div>
            <div class="content">
                <p>Welcome to {{RESOURCE_NAME}}!</p>
                <div class="actions">
                    <button id="exampleBtn" class="btn btn-primary">Example Action</button>
                </div>
            </div>
        </div>
    </div>
    <script src="script.js"></script>
</body>
</html>
"#;

const STYLE_CSS: &str = r#"* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: 'Inter', sans-serif;
    background: transparent;
    color: #C1C2C5;
    overflow: hidden;
}

.hidden {
    display: none !important;
}

#app {
    position: fixed;
    inset: 0;
    background: rgba(20, 21, 23, 0.75);
    display: flex;
    justify-content: center;
    align-items: center;
    z-index: 1000;
}

.container {
    background: #141517;
    border-radius: 12px;
    padding: 2rem;
    min-width: 400px;
    max-width: 600px;
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
}

.header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1.5rem;
    border-bottom: 1px solid #2c2e33;
    padding-bottom: 1rem;
}

.header h1 {
    color: #fff;
    font-size: 1.5rem;
    font-weight: 600;
}

.close-btn {
    background: none;
    border: none;
    color: #C1C2C5;
    font-size: 1.5rem;
    cursor: pointer;
    padding: 0.25rem;
    border-radius: 4px;
}

.close-btn:hover {
    background: #2c2e33;
    color: #fff;
}

.actions {
    display: flex;
    gap: 1rem;
    justify-content: flex-end;
}

.btn {
    padding: 0.6rem 1.2rem;
    border: none;
    border-radius: 8px;
    font-size: 0.9rem;
    cursor: pointer;
    font-weight: 500;
}

.btn-primary {
    background: #228be6;
    color: #fff;
}

.btn-primary:hover {
    background: #1c7ed6;
}
"#;

const SCRIPT_JS: &str = r#"// {{RESOURCE_NAME}} NUI Script
// Author: {{AUTHOR}}

const app = document.getElementById('app');

document.getElementById('closeBtn').addEventListener('click', closeUI);
document.getElementById('exampleBtn').addEventListener('click', handleExampleAction);

document.addEventListener('keydown', (event) => {
    if (event.key === 'Escape') {
        closeUI();
    }
});

window.addEventListener('message', (event) => {
    const { action, data } = event.data;

    switch (action) {
        case 'show':
            app.classList.remove('hidden');
            break;
        case 'hide':
            app.classList.add('hidden');
            break;
        case 'update':
            console.log('Updating UI with:', data);
            break;
    }
});

function post(endpoint, body = {}) {
    return fetch(`https://${GetParentResourceName()}/${endpoint}`, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json; charset=UTF-8' },
        body: JSON.stringify(body),
    });
}

function closeUI() {
    app.classList.add('hidden');
    post('close');
}

function handleExampleAction() {
    post('example-action', { action: 'example', timestamp: Date.now() });
}

function GetParentResourceName() {
    return window.location.hostname;
}
"#;

const NUI_CLIENT_LUA: &str = r#"-- {{RESOURCE_NAME}} NUI Client Script
-- Author: {{AUTHOR}}

local isUIOpen = false

local function openUI(data)
    if isUIOpen then return end

    isUIOpen = true
    SetNuiFocus(true, true)
    SendNUIMessage({ action = 'show', data = data or {} })
end

local function closeUI()
    if not isUIOpen then return end

    isUIOpen = false
    SetNuiFocus(false, false)
    SendNUIMessage({ action = 'hide' })
end

-- NUI Callbacks
RegisterNUICallback('close', function(data, cb)
    closeUI()
    cb('ok')
end)

RegisterNUICallback('example-action', function(data, cb)
    TriggerServerEvent('{{RESOURCE_NAME}}:server:example', data)
    cb('ok')
end)

-- Event Handlers
RegisterNetEvent('{{RESOURCE_NAME}}:client:openUI', openUI)
RegisterNetEvent('{{RESOURCE_NAME}}:client:closeUI', closeUI)

RegisterNetEvent('{{RESOURCE_NAME}}:client:updateUI', function(data)
    if isUIOpen then
        SendNUIMessage({ action = 'update', data = data })
    end
end)

RegisterCommand('{{RESOURCE_NAME}}', function()
    openUI()
end, false)

RegisterKeyMapping('{{RESOURCE_NAME}}', 'Open {{RESOURCE_NAME}}', 'keyboard', 'F6')

CreateThread(function()
    print('^2[{{RESOURCE_NAME}}]^7 NUI client script loaded')
end)
"#;

const NUI_CLIENT_JS: &str = r#"// {{RESOURCE_NAME}} NUI Client Script
// Author: {{AUTHOR}}

let isUIOpen = false;

function openUI(data = {}) {
    if (isUIOpen) return;
    isUIOpen = true;
    SetNuiFocus(true, true);
    SendNUIMessage({ action: 'show', data });
}

function closeUI() {
    if (!isUIOpen) return;
    isUIOpen = false;
    SetNuiFocus(false, false);
    SendNUIMessage({ action: 'hide' });
}

RegisterNuiCallbackType('close');
on('__cfx_nui:close', (data, cb) => {
    closeUI();
    cb('ok');
});

RegisterNuiCallbackType('example-action');
on('__cfx_nui:example-action', (data, cb) => {
    emitNet('{{RESOURCE_NAME}}:server:example', data);
    cb('ok');
});

onNet('{{RESOURCE_NAME}}:client:openUI', openUI);
onNet('{{RESOURCE_NAME}}:client:closeUI', closeUI);

RegisterCommand('{{RESOURCE_NAME}}', () => openUI(), false);
RegisterKeyMapping('{{RESOURCE_NAME}}', 'Open {{RESOURCE_NAME}}', 'keyboard', 'F6');
"#;

pub(crate) fn client(subs: &Substitutions) -> String {
    match subs.language {
        ScriptLanguage::Lua => fill(NUI_CLIENT_LUA, &[], subs),
        ScriptLanguage::JavaScript => fill(NUI_CLIENT_JS, &[], subs),
    }
}

/// `(path, content)` for each file of the page.
pub(crate) fn page(subs: &Substitutions) -> [(&'static str, String); 3] {
    [
        (WEB_FILES[0], fill(INDEX_HTML, &[], subs)),
        (WEB_FILES[1], STYLE_CSS.to_string()),
        (WEB_FILES[2], fill(SCRIPT_JS, &[], subs)),
    ]
}
