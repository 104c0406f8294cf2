#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_sync::mutex::Mutex;

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{
    clock::CpuClock,
    gpio::{Level, Output, OutputConfig},
    timer::timg::TimerGroup,
};
use esp_println::println;

use ledpanel_core::Panel;
use ledpanel_firmware::drivers::{
    AdcThermometer, LedcBuzzer, init_ledc, init_leds, init_network_stack, join, wait_for_connection,
};
use ledpanel_firmware::tasks::{
    http_server_task, network_runner_task, run_shutoff_loop, wifi_link_task,
};
use ledpanel_firmware::{SharedPanel, config, halt, mk_static};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();
    println!("{} {}", config::DEVICE.name, config::BUILD_VERSION);
    log::info!("panel: mode {:?}", config::PANEL.mode);

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Allocate heap memory for the radio (64 + 32 KB)
    esp_alloc::heap_allocator!(
        #[unsafe(link_section = ".dram2_uninit")] size: 64 * 1024
    );
    esp_alloc::heap_allocator!(size: 32 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Outputs come up dark before the network is touched
    let ledc = init_ledc(peripherals.LEDC);
    let leds = match init_leds(
        ledc,
        ledpanel_firmware::red_led_gpio!(peripherals),
        ledpanel_firmware::green_led_gpio!(peripherals),
        ledpanel_firmware::blue_led_gpio!(peripherals),
    ) {
        Ok(leds) => leds,
        Err(e) => halt("pwm init", e),
    };
    let thermometer = AdcThermometer::new(
        peripherals.ADC1,
        ledpanel_firmware::temperature_gpio!(peripherals),
    );
    let buzzer = LedcBuzzer::new(ledc, ledpanel_firmware::buzzer_gpio!(peripherals));
    let status_led = Output::new(
        ledpanel_firmware::status_led_gpio!(peripherals),
        Level::Low,
        OutputConfig::default(),
    );
    let panel = &*mk_static!(
        SharedPanel,
        Mutex::new(Panel::new(
            config::PANEL,
            leds,
            thermometer,
            buzzer,
            status_led,
            embassy_time::Delay,
        ))
    );

    // Join the network; any failure here is fatal
    let mut network = match init_network_stack(peripherals.WIFI) {
        Ok(network) => network,
        Err(e) => halt("network init", e),
    };
    spawner.spawn(network_runner_task(network.runner)).ok();
    if let Err(e) = join(&mut network.controller).await {
        halt("wifi join", e);
    }
    let ip_config = match wait_for_connection(network.stack).await {
        Ok(ip_config) => ip_config,
        Err(e) => halt("dhcp", e),
    };
    println!("Connected, open http://{}/", ip_config.address.address());

    spawner.spawn(wifi_link_task(network.controller)).ok();
    spawner.spawn(http_server_task(network.stack, panel)).ok();

    run_shutoff_loop(panel).await
}
